use soroban_sdk::{contracttype, Address};

/// Staking configuration - immutable after creation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingConfig {
    /// Ledger of the staked unit (pool shares)
    pub stake_token: Address,
    /// Ledger of the reward asset; may be the stake token itself
    pub reward_token: Address,
}

impl StakingConfig {
    /// True when rewards are paid in the staked unit, so the principal has
    /// to be excluded from the reward balance
    pub fn rewards_in_stake_token(&self) -> bool {
        self.stake_token == self.reward_token
    }
}

/// Key of a stake: the operator supplies and recovers the staked shares,
/// the account owns the position and receives its rewards
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeKey {
    pub operator: Address,
    pub account: Address,
}

/// Per-position staking state
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakeAccount {
    /// Pool shares staked
    pub amount_staked: i128,
    /// Accumulator value at the last settlement
    pub reward_per_token_paid: i128,
    /// Settled but unharvested reward
    pub pending_reward: i128,
}

/// Global accumulator state
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakingGlobal {
    /// Reward per staked unit, scaled by `REWARD_SCALE`
    pub reward_per_token_stored: i128,
    /// Sum of all `amount_staked`
    pub total_staked: i128,
    /// Reward balance already folded into the accumulator
    pub last_accounted_reward_balance: i128,
}
