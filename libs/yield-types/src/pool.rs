use soroban_sdk::{contracttype, Address};

/// Pool configuration - immutable after creation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// First reserve asset
    pub token0: Address,
    /// Second reserve asset
    pub token1: Address,
}

/// Reserve and share-supply state - stored in Instance storage
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    /// Amount of token0 held on behalf of share holders
    pub reserve0: i128,
    /// Amount of token1 held on behalf of share holders
    pub reserve1: i128,
    /// Total pool shares, including the locked minimum liquidity
    pub total_shares: i128,
    /// Shares minted to nobody at the first mint
    pub locked_shares: i128,
}

impl PoolState {
    pub fn is_empty(&self) -> bool {
        self.total_shares == 0
    }
}

/// Spender allowance on the pool-share ledger
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    /// Last ledger sequence at which the allowance may be spent
    pub expiration_ledger: u32,
}
