// ============================================================================
// Pool invariants
//
// Predicates over PoolState snapshots, asserted around every reserve update
// (debug builds) and exercised directly by the tests.
//
// 1. SUPPLY
//    - Locked minimum liquidity is part of the supply and never released
//
// 2. BACKING
//    - A pool with outstanding shares holds both reserves
//
// 3. VALUE PER SHARE
//    - reserve_i / total_shares never decreases across mint or burn, so no
//      share holder can extract value without burning proportional shares
// ============================================================================

use soroban_sdk::{Env, U256};
use yield_types::PoolState;

/// Invariant: locked shares are covered by the supply
///
/// Property:
///   0 <= locked_shares <= total_shares
pub fn supply_covers_locked(state: &PoolState) -> bool {
    state.locked_shares >= 0 && state.total_shares >= state.locked_shares
}

/// Invariant: outstanding shares are backed by both reserves
///
/// Property:
///   total_shares > 0 => reserve0 > 0 && reserve1 > 0
pub fn reserves_backed(state: &PoolState) -> bool {
    state.total_shares == 0 || (state.reserve0 > 0 && state.reserve1 > 0)
}

/// Invariant: reserves per share do not decrease
///
/// Property (for i in {0, 1}):
///   after.reserve_i * before.total_shares >= before.reserve_i * after.total_shares
///
/// Vacuous when either snapshot is empty (first mint, or a burn down to zero).
pub fn reserves_per_share_non_decreasing(env: &Env, before: &PoolState, after: &PoolState) -> bool {
    if before.total_shares == 0 || after.total_shares == 0 {
        return true;
    }
    let widen = |v: i128| U256::from_u128(env, v as u128);

    let lhs0 = widen(after.reserve0).mul(&widen(before.total_shares));
    let rhs0 = widen(before.reserve0).mul(&widen(after.total_shares));
    let lhs1 = widen(after.reserve1).mul(&widen(before.total_shares));
    let rhs1 = widen(before.reserve1).mul(&widen(after.total_shares));

    lhs0 >= rhs0 && lhs1 >= rhs1
}
