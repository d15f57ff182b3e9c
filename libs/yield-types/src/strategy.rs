use soroban_sdk::{contracttype, Address};

/// Strategy bindings, written exactly once by `initialize`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyConfig {
    pub pool: Address,
    pub staking: Address,
    pub vault: Address,
    /// Pool reserve assets, cached at initialization
    pub token0: Address,
    pub token1: Address,
    /// Staking reward asset, cached at initialization
    pub reward_token: Address,
    /// Per-asset deposit floor
    pub minimum_deposit: i128,
}
