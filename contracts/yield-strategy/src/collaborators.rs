// Calls into the pool, staking and vault contracts bound at initialization.
// A collaborator that returns an error traps the whole invocation.

use soroban_sdk::{Address, Env, IntoVal, Symbol};

// === Pool ===

pub fn pool_token0(env: &Env, pool: &Address) -> Address {
    env.invoke_contract(pool, &Symbol::new(env, "token0"), ().into_val(env))
}

pub fn pool_token1(env: &Env, pool: &Address) -> Address {
    env.invoke_contract(pool, &Symbol::new(env, "token1"), ().into_val(env))
}

pub fn pool_mint(env: &Env, pool: &Address, to: &Address, amount0: i128, amount1: i128) -> i128 {
    env.invoke_contract(
        pool,
        &Symbol::new(env, "mint"),
        (to, amount0, amount1).into_val(env),
    )
}

pub fn pool_burn(
    env: &Env,
    pool: &Address,
    from: &Address,
    to: &Address,
    shares: i128,
) -> (i128, i128) {
    env.invoke_contract(
        pool,
        &Symbol::new(env, "burn"),
        (from, to, shares).into_val(env),
    )
}

pub fn pool_quote(env: &Env, pool: &Address, shares: i128) -> (i128, i128) {
    env.invoke_contract(pool, &Symbol::new(env, "quote"), (shares,).into_val(env))
}

// === Staking ===

pub fn staking_stake_token(env: &Env, staking: &Address) -> Address {
    env.invoke_contract(staking, &Symbol::new(env, "stake_token"), ().into_val(env))
}

pub fn staking_reward_token(env: &Env, staking: &Address) -> Address {
    env.invoke_contract(staking, &Symbol::new(env, "reward_token"), ().into_val(env))
}

pub fn staking_stake(env: &Env, staking: &Address, operator: &Address, account: &Address, amount: i128) {
    env.invoke_contract::<()>(
        staking,
        &Symbol::new(env, "stake"),
        (operator, account, amount).into_val(env),
    );
}

pub fn staking_unstake(env: &Env, staking: &Address, operator: &Address, account: &Address, amount: i128) {
    env.invoke_contract::<()>(
        staking,
        &Symbol::new(env, "unstake"),
        (operator, account, amount).into_val(env),
    );
}

pub fn staking_harvest(env: &Env, staking: &Address, operator: &Address, account: &Address) -> i128 {
    env.invoke_contract(
        staking,
        &Symbol::new(env, "harvest"),
        (operator, account).into_val(env),
    )
}

pub fn staking_accrued_reward(
    env: &Env,
    staking: &Address,
    operator: &Address,
    account: &Address,
) -> i128 {
    env.invoke_contract(
        staking,
        &Symbol::new(env, "accrued_reward"),
        (operator, account).into_val(env),
    )
}

pub fn staking_balance(env: &Env, staking: &Address, operator: &Address, account: &Address) -> i128 {
    env.invoke_contract(
        staking,
        &Symbol::new(env, "balance"),
        (operator, account).into_val(env),
    )
}

pub fn staking_staked_by(env: &Env, staking: &Address, operator: &Address) -> i128 {
    env.invoke_contract(staking, &Symbol::new(env, "staked_by"), (operator,).into_val(env))
}

pub fn staking_total_staked(env: &Env, staking: &Address) -> i128 {
    env.invoke_contract(staking, &Symbol::new(env, "total_staked"), ().into_val(env))
}

// === Vault ===

pub fn vault_initialize(env: &Env, vault: &Address, manager: &Address) {
    env.invoke_contract::<()>(
        vault,
        &Symbol::new(env, "initialize"),
        (manager,).into_val(env),
    );
}

pub fn vault_deposit(
    env: &Env,
    vault: &Address,
    assets_in: i128,
    receiver: &Address,
    total_assets: i128,
) -> i128 {
    env.invoke_contract(
        vault,
        &Symbol::new(env, "deposit"),
        (assets_in, receiver, total_assets).into_val(env),
    )
}

pub fn vault_withdraw(
    env: &Env,
    vault: &Address,
    shares_in: i128,
    owner: &Address,
    total_assets: i128,
) -> i128 {
    env.invoke_contract(
        vault,
        &Symbol::new(env, "withdraw"),
        (shares_in, owner, total_assets).into_val(env),
    )
}

pub fn vault_balance(env: &Env, vault: &Address, id: &Address) -> i128 {
    env.invoke_contract(vault, &Symbol::new(env, "balance"), (id,).into_val(env))
}
