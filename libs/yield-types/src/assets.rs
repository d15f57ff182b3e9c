use crate::Error;
use soroban_sdk::{token, Address, Env};

/// Check that `spender` can pull `amount` of `asset` from `from`.
///
/// Works against any ledger exposing the SEP-41 `balance`/`allowance` pair,
/// including the pool-share ledger.
pub fn ensure_pullable(
    env: &Env,
    asset: &Address,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), Error> {
    let client = token::Client::new(env, asset);
    if client.balance(from) < amount || client.allowance(from, spender) < amount {
        return Err(Error::InsufficientBalanceOrAllowance);
    }
    Ok(())
}

/// Checked `a + b` for ledger amounts
pub fn add(a: i128, b: i128) -> Result<i128, Error> {
    a.checked_add(b).ok_or(Error::ArithmeticOverflowOrUnderflow)
}

/// Checked `a - b` for ledger amounts; a negative result is an underflow
pub fn sub(a: i128, b: i128) -> Result<i128, Error> {
    match a.checked_sub(b) {
        Some(v) if v >= 0 => Ok(v),
        _ => Err(Error::ArithmeticOverflowOrUnderflow),
    }
}
