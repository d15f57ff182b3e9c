#![no_std]

mod storage;

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};
use storage::{
    get_config, get_shares, get_total_shares, has_config, set_config, set_shares,
    set_total_shares,
};
use yield_math::{assets_for_shares, shares_for_assets};
use yield_types::{add, sub, Error, VaultConfig, SHARE_DECIMALS};

/// Share ledger of the strategy.
///
/// The vault holds no assets. Its manager reports the current valuation on
/// every mint and burn and moves the underlying itself.
#[contract]
pub struct VaultAccounting;

#[contractimpl]
impl VaultAccounting {
    /// Bind the vault to its manager
    pub fn initialize(env: Env, manager: Address) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        set_config(&env, &VaultConfig { manager: manager.clone() });
        set_total_shares(&env, 0);

        env.events()
            .publish((Symbol::new(&env, "initialized"),), manager);
        Ok(())
    }

    /// Mint shares for `assets_in` to `receiver` at the price implied by
    /// `total_assets` (valuation before this deposit)
    pub fn deposit(
        env: Env,
        assets_in: i128,
        receiver: Address,
        total_assets: i128,
    ) -> Result<i128, Error> {
        get_config(&env)?.manager.require_auth();
        if assets_in <= 0 {
            return Err(Error::InsufficientDeposit);
        }

        let total_shares = get_total_shares(&env);
        let shares = shares_for_assets(&env, assets_in, total_shares, total_assets)?;
        if shares <= 0 {
            return Err(Error::InsufficientDeposit);
        }

        set_shares(&env, &receiver, add(get_shares(&env, &receiver), shares)?);
        set_total_shares(&env, add(total_shares, shares)?);

        env.events()
            .publish((Symbol::new(&env, "deposit"), receiver), (assets_in, shares));
        Ok(shares)
    }

    /// Burn `shares_in` of `owner` and return the assets they represent
    /// under `total_assets`
    pub fn withdraw(
        env: Env,
        shares_in: i128,
        owner: Address,
        total_assets: i128,
    ) -> Result<i128, Error> {
        get_config(&env)?.manager.require_auth();
        let balance = get_shares(&env, &owner);
        if shares_in <= 0 || balance < shares_in {
            return Err(Error::InsufficientShares);
        }

        let total_shares = get_total_shares(&env);
        let assets = assets_for_shares(&env, shares_in, total_shares, total_assets)?;

        set_shares(&env, &owner, sub(balance, shares_in)?);
        set_total_shares(&env, sub(total_shares, shares_in)?);

        env.events()
            .publish((Symbol::new(&env, "withdraw"), owner), (shares_in, assets));
        Ok(assets)
    }

    /// Move vault shares between holders
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        if amount < 0 {
            panic!("Negative amount");
        }
        let from_balance = get_shares(&env, &from);
        if from_balance < amount {
            return Err(Error::InsufficientBalanceOrAllowance);
        }
        set_shares(&env, &from, sub(from_balance, amount)?);
        set_shares(&env, &to, add(get_shares(&env, &to), amount)?);

        env.events()
            .publish((Symbol::new(&env, "transfer"), from, to), amount);
        Ok(())
    }

    // === View Functions ===

    pub fn balance(env: Env, id: Address) -> i128 {
        get_shares(&env, &id)
    }

    pub fn total_shares(env: Env) -> i128 {
        get_total_shares(&env)
    }

    pub fn decimals(_env: Env) -> u32 {
        SHARE_DECIMALS
    }

    /// Get the manager address
    pub fn manager(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.manager)
    }

    /// Shares a deposit of `assets` would mint under `total_assets`
    pub fn convert_to_shares(env: Env, assets: i128, total_assets: i128) -> Result<i128, Error> {
        shares_for_assets(&env, assets, get_total_shares(&env), total_assets)
    }

    /// Assets `shares` would redeem under `total_assets`
    pub fn convert_to_assets(env: Env, shares: i128, total_assets: i128) -> Result<i128, Error> {
        assets_for_shares(&env, shares, get_total_shares(&env), total_assets)
    }
}
