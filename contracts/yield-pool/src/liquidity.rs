use crate::invariants::{reserves_backed, reserves_per_share_non_decreasing, supply_covers_locked};
use crate::share_token::{burn_shares, mint_shares};
use crate::storage::{get_balance, get_config, get_state, set_state};
use soroban_sdk::{log, token, Address, Env, Symbol};
use yield_math::{apply_burn, apply_mint, compute_burn, compute_mint};
use yield_types::{ensure_pullable, Error, PoolState};

fn check_transition(env: &Env, before: &PoolState, after: &PoolState) {
    debug_assert!(supply_covers_locked(after));
    debug_assert!(reserves_backed(after));
    debug_assert!(reserves_per_share_non_decreasing(env, before, after));
}

/// Deposit both reserve assets and credit pool shares to `to`
///
/// The pool pulls the assets with `transfer_from`, so `to` must have
/// approved the pool on both asset contracts beforehand.
pub fn mint(env: &Env, to: &Address, amount0: i128, amount1: i128) -> Result<i128, Error> {
    let config = get_config(env)?;
    let state = get_state(env)?;

    let computation = compute_mint(env, &state, amount0, amount1)?;

    let pool = env.current_contract_address();
    ensure_pullable(env, &config.token0, to, &pool, amount0)?;
    ensure_pullable(env, &config.token1, to, &pool, amount1)?;

    let next = apply_mint(&state, &computation, amount0, amount1)?;
    check_transition(env, &state, &next);
    set_state(env, &next);
    mint_shares(env, to, computation.shares)?;

    token::Client::new(env, &config.token0).transfer_from(&pool, to, &pool, &amount0);
    token::Client::new(env, &config.token1).transfer_from(&pool, to, &pool, &amount1);

    if computation.locked > 0 {
        log!(env, "minimum liquidity locked", computation.locked);
    }

    env.events().publish(
        (Symbol::new(env, "mint"), to.clone()),
        (amount0, amount1, computation.shares),
    );

    Ok(computation.shares)
}

/// Burn `shares` held by `from` and pay the pro-rata reserves to `to`
pub fn burn(env: &Env, from: &Address, to: &Address, shares: i128) -> Result<(i128, i128), Error> {
    let config = get_config(env)?;
    let state = get_state(env)?;

    if get_balance(env, from) < shares {
        return Err(Error::InsufficientShares);
    }
    let (amount0, amount1) = compute_burn(env, &state, shares)?;

    let next = apply_burn(&state, shares, amount0, amount1)?;
    check_transition(env, &state, &next);
    set_state(env, &next);
    burn_shares(env, from, shares)?;

    let pool = env.current_contract_address();
    if amount0 > 0 {
        token::Client::new(env, &config.token0).transfer(&pool, to, &amount0);
    }
    if amount1 > 0 {
        token::Client::new(env, &config.token1).transfer(&pool, to, &amount1);
    }

    env.events().publish(
        (Symbol::new(env, "burn"), from.clone()),
        (to.clone(), shares, amount0, amount1),
    );

    Ok((amount0, amount1))
}

/// Reserve value of `shares`; zero when the pool is empty or uninitialized
pub fn quote(env: &Env, shares: i128) -> (i128, i128) {
    match get_state(env) {
        Ok(state) => yield_math::quote(env, &state, shares).unwrap_or((0, 0)),
        Err(_) => (0, 0),
    }
}
