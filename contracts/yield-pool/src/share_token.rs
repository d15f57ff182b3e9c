use crate::storage::{get_allowance, get_balance, set_allowance, set_balance};
use soroban_sdk::{Address, Env};
use yield_types::{add, sub, AllowanceValue, Error};

fn check_nonnegative(amount: i128) {
    if amount < 0 {
        panic!("Negative amount");
    }
}

/// Credit newly issued shares
pub fn mint_shares(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let balance = get_balance(env, to);
    set_balance(env, to, add(balance, amount)?);
    Ok(())
}

/// Destroy shares held by `from`
pub fn burn_shares(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let balance = get_balance(env, from);
    if balance < amount {
        return Err(Error::InsufficientShares);
    }
    set_balance(env, from, sub(balance, amount)?);
    Ok(())
}

/// Move shares between holders
pub fn move_shares(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    check_nonnegative(amount);
    let from_balance = get_balance(env, from);
    if from_balance < amount {
        return Err(Error::InsufficientBalanceOrAllowance);
    }
    set_balance(env, from, sub(from_balance, amount)?);
    let to_balance = get_balance(env, to);
    set_balance(env, to, add(to_balance, amount)?);
    Ok(())
}

/// Record an allowance for `spender`
pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128, expiration_ledger: u32) {
    check_nonnegative(amount);
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        panic!("Expiration ledger in the past");
    }
    set_allowance(
        env,
        owner,
        spender,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );
}

/// Consume `amount` of the allowance `owner` granted to `spender`
pub fn spend_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), Error> {
    check_nonnegative(amount);
    let allowance = get_allowance(env, owner, spender);
    if allowance.amount < amount {
        return Err(Error::InsufficientBalanceOrAllowance);
    }
    if amount > 0 {
        set_allowance(
            env,
            owner,
            spender,
            &AllowanceValue {
                amount: sub(allowance.amount, amount)?,
                expiration_ledger: allowance.expiration_ledger,
            },
        );
    }
    Ok(())
}
