#![no_std]

mod invariants;
mod liquidity;
mod share_token;
mod storage;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol};
use storage::{get_allowance, get_balance, get_config, get_state, has_config, set_config, set_state};
use yield_types::{Error, PoolConfig, PoolState, SHARE_DECIMALS};

#[contract]
pub struct LiquidityPool;

#[contractimpl]
impl LiquidityPool {
    /// Initialize an empty two-asset pool
    pub fn initialize(env: Env, token0: Address, token1: Address) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if token0 == token1 {
            panic!("Identical tokens");
        }

        set_config(
            &env,
            &PoolConfig {
                token0: token0.clone(),
                token1: token1.clone(),
            },
        );
        set_state(&env, &PoolState::default());

        env.events()
            .publish((Symbol::new(&env, "initialized"),), (token0, token1));
        Ok(())
    }

    /// Deposit both assets and mint pool shares to `to`
    ///
    /// # Returns
    /// Shares credited to `to`. The first mint additionally locks
    /// `MINIMUM_LIQUIDITY` shares that nobody owns.
    pub fn mint(env: Env, to: Address, amount0: i128, amount1: i128) -> Result<i128, Error> {
        to.require_auth();
        liquidity::mint(&env, &to, amount0, amount1)
    }

    /// Burn pool shares owned by `from` and send the reserves to `to`
    ///
    /// # Returns
    /// (amount0, amount1) - Reserve amounts paid out
    pub fn burn(env: Env, from: Address, to: Address, shares: i128) -> Result<(i128, i128), Error> {
        from.require_auth();
        liquidity::burn(&env, &from, &to, shares)
    }

    /// Reserve value of `shares` at current reserves
    pub fn quote(env: Env, shares: i128) -> (i128, i128) {
        liquidity::quote(&env, shares)
    }

    // === Pool Share Ledger ===

    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        get_allowance(&env, &from, &spender).amount
    }

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        share_token::approve(&env, &from, &spender, amount, expiration_ledger);
        env.events().publish(
            (Symbol::new(&env, "approve"), from, spender),
            (amount, expiration_ledger),
        );
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        share_token::move_shares(&env, &from, &to, amount)?;
        env.events()
            .publish((Symbol::new(&env, "transfer"), from, to), amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        share_token::spend_allowance(&env, &from, &spender, amount)?;
        share_token::move_shares(&env, &from, &to, amount)?;
        env.events()
            .publish((Symbol::new(&env, "transfer"), from, to), amount);
        Ok(())
    }

    /// Total pool shares, including the locked minimum liquidity
    pub fn total_supply(env: Env) -> i128 {
        get_state(&env).map(|s| s.total_shares).unwrap_or(0)
    }

    pub fn decimals(_env: Env) -> u32 {
        SHARE_DECIMALS
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, "Yield Pool Share")
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, "YPS")
    }

    // === View Functions ===

    /// Get current pool state
    pub fn get_state(env: Env) -> Result<PoolState, Error> {
        get_state(&env)
    }

    /// Get pool configuration
    pub fn get_config(env: Env) -> Result<PoolConfig, Error> {
        get_config(&env)
    }

    /// Get (reserve0, reserve1)
    pub fn reserves(env: Env) -> (i128, i128) {
        get_state(&env)
            .map(|s| (s.reserve0, s.reserve1))
            .unwrap_or((0, 0))
    }

    /// Get token0 address
    pub fn token0(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.token0)
    }

    /// Get token1 address
    pub fn token1(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.token1)
    }
}
