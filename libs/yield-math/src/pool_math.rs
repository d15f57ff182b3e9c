use crate::full_math::{isqrt, mul_div};
use soroban_sdk::Env;
use yield_types::{add, sub, Error, PoolState, MINIMUM_LIQUIDITY};

/// Shares issued for a deposit (pure computation, no storage)
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintComputation {
    /// Shares credited to the depositor
    pub shares: i128,
    /// Shares added to the supply but owned by nobody
    pub locked: i128,
}

/// Price a two-sided deposit against the current reserves.
///
/// The first deposit receives `sqrt(amount0 * amount1) - MINIMUM_LIQUIDITY`;
/// later deposits receive the smaller of the two proportional amounts.
pub fn compute_mint(
    env: &Env,
    state: &PoolState,
    amount0: i128,
    amount1: i128,
) -> Result<MintComputation, Error> {
    if amount0 <= 0 || amount1 <= 0 {
        return Err(Error::InsufficientDeposit);
    }

    let computation = if state.is_empty() {
        let product = (amount0 as u128)
            .checked_mul(amount1 as u128)
            .ok_or(Error::ArithmeticOverflowOrUnderflow)?;
        // sqrt of a u128 always fits in 64 bits
        let root = isqrt(product) as i128;
        MintComputation {
            shares: root - MINIMUM_LIQUIDITY,
            locked: MINIMUM_LIQUIDITY,
        }
    } else {
        if state.reserve0 == 0 || state.reserve1 == 0 {
            return Err(Error::ValuationUnavailable);
        }
        let shares0 = mul_div(env, amount0, state.total_shares, state.reserve0)?;
        let shares1 = mul_div(env, amount1, state.total_shares, state.reserve1)?;
        MintComputation {
            shares: shares0.min(shares1),
            locked: 0,
        }
    };

    if computation.shares <= 0 {
        return Err(Error::InsufficientDeposit);
    }
    Ok(computation)
}

/// Pro-rata reserve value of `shares`; zero for an empty pool
pub fn quote(env: &Env, state: &PoolState, shares: i128) -> Result<(i128, i128), Error> {
    if state.is_empty() || shares <= 0 {
        return Ok((0, 0));
    }
    let amount0 = mul_div(env, shares, state.reserve0, state.total_shares)?;
    let amount1 = mul_div(env, shares, state.reserve1, state.total_shares)?;
    Ok((amount0, amount1))
}

/// Reserve amounts released by burning `shares` (rounds down)
pub fn compute_burn(env: &Env, state: &PoolState, shares: i128) -> Result<(i128, i128), Error> {
    if shares <= 0 || shares > state.total_shares - state.locked_shares {
        return Err(Error::InsufficientShares);
    }
    quote(env, state, shares)
}

/// State after a mint has been applied
pub fn apply_mint(
    state: &PoolState,
    computation: &MintComputation,
    amount0: i128,
    amount1: i128,
) -> Result<PoolState, Error> {
    Ok(PoolState {
        reserve0: add(state.reserve0, amount0)?,
        reserve1: add(state.reserve1, amount1)?,
        total_shares: add(add(state.total_shares, computation.shares)?, computation.locked)?,
        locked_shares: add(state.locked_shares, computation.locked)?,
    })
}

/// State after a burn has been applied
pub fn apply_burn(
    state: &PoolState,
    shares: i128,
    amount0: i128,
    amount1: i128,
) -> Result<PoolState, Error> {
    Ok(PoolState {
        reserve0: sub(state.reserve0, amount0)?,
        reserve1: sub(state.reserve1, amount1)?,
        total_shares: sub(state.total_shares, shares)?,
        locked_shares: state.locked_shares,
    })
}
