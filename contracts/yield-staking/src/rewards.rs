use crate::storage::{get_global, set_global};
use soroban_sdk::{log, token, Env, Symbol};
use yield_math::accrue;
use yield_types::{sub, Error, StakingConfig, StakingGlobal};

/// Reward asset held by the staking contract on behalf of stakers.
///
/// When rewards are paid in the stake token the staked principal sits in the
/// same balance and is excluded.
pub fn current_reward_balance(
    env: &Env,
    config: &StakingConfig,
    global: &StakingGlobal,
) -> Result<i128, Error> {
    let held = token::Client::new(env, &config.reward_token).balance(&env.current_contract_address());
    if config.rewards_in_stake_token() {
        sub(held, global.total_staked)
    } else {
        Ok(held)
    }
}

/// Fold rewards received since the last mutation into the accumulator.
///
/// Must run before any change to stakes or to the reward balance.
pub fn update_accumulator(env: &Env, config: &StakingConfig) -> Result<StakingGlobal, Error> {
    let global = get_global(env)?;
    let balance = current_reward_balance(env, config, &global)?;
    let next = accrue(env, &global, balance)?;

    if next.last_accounted_reward_balance != global.last_accounted_reward_balance {
        let received = sub(balance, global.last_accounted_reward_balance)?;
        if global.total_staked == 0 {
            log!(env, "rewards received with nothing staked", received);
        }
        env.events().publish(
            (Symbol::new(env, "rewards_accrued"),),
            (received, next.reward_per_token_stored),
        );
    }

    set_global(env, &next);
    Ok(next)
}
