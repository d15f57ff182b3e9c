#![no_std]

mod assets;
mod error;
mod pool;
mod staking;
mod strategy;
mod vault;

pub use assets::*;
pub use error::*;
pub use pool::*;
pub use staking::*;
pub use strategy::*;
pub use vault::*;

/// Pool shares locked forever at the first mint
pub const MINIMUM_LIQUIDITY: i128 = 1000;

/// Fixed-point scale of the reward-per-token accumulator (1e18)
pub const REWARD_SCALE: i128 = 1_000_000_000_000_000_000;

/// Smallest per-asset amount the strategy accepts on deposit
pub const MINIMUM_DEPOSIT: i128 = 1000;

/// Decimals reported by the pool-share and vault-share ledgers
pub const SHARE_DECIMALS: u32 = 7;
