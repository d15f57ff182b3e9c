use crate::full_math::mul_div;
use soroban_sdk::Env;
use yield_types::{add, sub, Error, StakeAccount, StakingGlobal, REWARD_SCALE};

/// Fold newly observed reward balance into the accumulator.
///
/// Rewards that arrive while nothing is staked are marked as accounted
/// without raising the accumulator.
pub fn accrue(
    env: &Env,
    global: &StakingGlobal,
    current_reward_balance: i128,
) -> Result<StakingGlobal, Error> {
    let delta = sub(current_reward_balance, global.last_accounted_reward_balance)?;

    let mut next = global.clone();
    if global.total_staked > 0 && delta > 0 {
        let increment = mul_div(env, delta, REWARD_SCALE, global.total_staked)?;
        next.reward_per_token_stored = add(global.reward_per_token_stored, increment)?;
    }
    next.last_accounted_reward_balance = current_reward_balance;
    Ok(next)
}

/// Reward earned by `account` since its last checkpoint
pub fn owed(env: &Env, account: &StakeAccount, reward_per_token: i128) -> Result<i128, Error> {
    let growth = sub(reward_per_token, account.reward_per_token_paid)?;
    mul_div(env, growth, account.amount_staked, REWARD_SCALE)
}

/// Crystallize owed reward into `pending_reward` and move the checkpoint
pub fn settle(
    env: &Env,
    account: &StakeAccount,
    reward_per_token: i128,
) -> Result<StakeAccount, Error> {
    let earned = owed(env, account, reward_per_token)?;
    Ok(StakeAccount {
        amount_staked: account.amount_staked,
        reward_per_token_paid: reward_per_token,
        pending_reward: add(account.pending_reward, earned)?,
    })
}

/// Harvestable amount of `account` as of `current_reward_balance`,
/// without persisting anything
pub fn project_reward(
    env: &Env,
    global: &StakingGlobal,
    account: &StakeAccount,
    current_reward_balance: i128,
) -> Result<i128, Error> {
    let projected = accrue(env, global, current_reward_balance)?;
    let earned = owed(env, account, projected.reward_per_token_stored)?;
    add(account.pending_reward, earned)
}
