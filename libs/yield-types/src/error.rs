use soroban_sdk::contracterror;

/// Failure reasons shared by the pool, staking, vault and strategy contracts.
///
/// Codes are stable: a failure raised in a sub-contract keeps its code when it
/// aborts the enclosing strategy call.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has not been initialized
    Uninitialized = 1,
    /// `initialize` was already called
    AlreadyInitialized = 2,
    /// Deposit is below the minimum or too small to mint anything
    InsufficientDeposit = 3,
    /// Token balance or spender allowance does not cover the pull
    InsufficientBalanceOrAllowance = 4,
    /// Share balance is below the requested amount
    InsufficientShares = 5,
    /// Staked balance is below the requested amount
    InsufficientStake = 6,
    /// Share price would be computed against a zero valuation
    ValuationUnavailable = 7,
    /// Checked arithmetic failed
    ArithmeticOverflowOrUnderflow = 8,
    /// A mutating entry point is already executing
    ReentrancyRejected = 9,
}
