#![no_std]

mod rewards;
mod storage;

use soroban_sdk::{contract, contractimpl, token, Address, Env, Symbol};
use storage::{
    get_account, get_config, get_global, get_operator_total, has_config, set_account,
    set_config, set_global, set_operator_total,
};
use yield_math::{project_reward, settle};
use yield_types::{
    add, ensure_pullable, sub, Error, StakeAccount, StakeKey, StakingConfig, StakingGlobal,
};

#[contract]
pub struct RewardStaking;

#[contractimpl]
impl RewardStaking {
    /// Initialize staking of `stake_token` with rewards paid in `reward_token`
    pub fn initialize(env: Env, stake_token: Address, reward_token: Address) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }

        set_config(
            &env,
            &StakingConfig {
                stake_token: stake_token.clone(),
                reward_token: reward_token.clone(),
            },
        );
        set_global(&env, &StakingGlobal::default());

        env.events().publish(
            (Symbol::new(&env, "initialized"),),
            (stake_token, reward_token),
        );
        Ok(())
    }

    /// Stake `amount` supplied by `operator` into the position of `account`
    ///
    /// The staking contract pulls the stake with `transfer_from`, so the
    /// operator must have approved it on the stake token.
    pub fn stake(env: Env, operator: Address, account: Address, amount: i128) -> Result<(), Error> {
        operator.require_auth();
        if amount <= 0 {
            return Err(Error::InsufficientStake);
        }
        let config = get_config(&env)?;
        let staking = env.current_contract_address();
        ensure_pullable(&env, &config.stake_token, &operator, &staking, amount)?;

        let mut global = rewards::update_accumulator(&env, &config)?;
        let key = StakeKey {
            operator: operator.clone(),
            account: account.clone(),
        };
        let mut position = settle(&env, &get_account(&env, &key), global.reward_per_token_stored)?;
        position.amount_staked = add(position.amount_staked, amount)?;
        global.total_staked = add(global.total_staked, amount)?;

        set_account(&env, &key, &position);
        set_global(&env, &global);
        set_operator_total(&env, &operator, add(get_operator_total(&env, &operator), amount)?);

        token::Client::new(&env, &config.stake_token).transfer_from(&staking, &operator, &staking, &amount);

        env.events()
            .publish((Symbol::new(&env, "stake"), operator, account), amount);
        Ok(())
    }

    /// Return `amount` of the position of `account` to `operator`
    pub fn unstake(env: Env, operator: Address, account: Address, amount: i128) -> Result<(), Error> {
        operator.require_auth();
        if amount <= 0 {
            return Err(Error::InsufficientStake);
        }
        let config = get_config(&env)?;

        let mut global = rewards::update_accumulator(&env, &config)?;
        let key = StakeKey {
            operator: operator.clone(),
            account: account.clone(),
        };
        let current = get_account(&env, &key);
        if current.amount_staked < amount {
            return Err(Error::InsufficientStake);
        }
        let mut position = settle(&env, &current, global.reward_per_token_stored)?;
        position.amount_staked = sub(position.amount_staked, amount)?;
        global.total_staked = sub(global.total_staked, amount)?;

        set_account(&env, &key, &position);
        set_global(&env, &global);
        set_operator_total(&env, &operator, sub(get_operator_total(&env, &operator), amount)?);

        token::Client::new(&env, &config.stake_token).transfer(
            &env.current_contract_address(),
            &operator,
            &amount,
        );

        env.events()
            .publish((Symbol::new(&env, "unstake"), operator, account), amount);
        Ok(())
    }

    /// Pay all accrued reward of the position to `account`
    ///
    /// # Returns
    /// Amount paid; zero when nothing has accrued
    pub fn harvest(env: Env, operator: Address, account: Address) -> Result<i128, Error> {
        operator.require_auth();
        let config = get_config(&env)?;

        let mut global = rewards::update_accumulator(&env, &config)?;
        let key = StakeKey {
            operator: operator.clone(),
            account: account.clone(),
        };
        let mut position = settle(&env, &get_account(&env, &key), global.reward_per_token_stored)?;
        let paid = position.pending_reward;
        position.pending_reward = 0;
        set_account(&env, &key, &position);

        if paid > 0 {
            global.last_accounted_reward_balance = sub(global.last_accounted_reward_balance, paid)?;
            set_global(&env, &global);
            token::Client::new(&env, &config.reward_token).transfer(
                &env.current_contract_address(),
                &account,
                &paid,
            );
        }

        env.events()
            .publish((Symbol::new(&env, "harvest"), operator, account), paid);
        Ok(paid)
    }

    /// Reward `harvest` would pay right now, including rewards received
    /// since the last mutation. Zero for an uninitialized contract.
    pub fn accrued_reward(env: Env, operator: Address, account: Address) -> Result<i128, Error> {
        let Ok(config) = get_config(&env) else {
            return Ok(0);
        };
        let global = get_global(&env)?;
        let balance = rewards::current_reward_balance(&env, &config, &global)?;
        let key = StakeKey { operator, account };
        project_reward(&env, &global, &get_account(&env, &key), balance)
    }

    // === View Functions ===

    /// Get accumulator state
    pub fn get_global(env: Env) -> Result<StakingGlobal, Error> {
        get_global(&env)
    }

    /// Get a stake position
    pub fn get_account(env: Env, operator: Address, account: Address) -> StakeAccount {
        get_account(&env, &StakeKey { operator, account })
    }

    /// Staked amount of a position
    pub fn balance(env: Env, operator: Address, account: Address) -> i128 {
        get_account(&env, &StakeKey { operator, account }).amount_staked
    }

    /// Sum of all positions supplied by `operator`
    pub fn staked_by(env: Env, operator: Address) -> i128 {
        get_operator_total(&env, &operator)
    }

    pub fn total_staked(env: Env) -> i128 {
        get_global(&env).map(|g| g.total_staked).unwrap_or(0)
    }

    /// Stored accumulator value, scaled by `REWARD_SCALE`
    pub fn reward_per_token(env: Env) -> i128 {
        get_global(&env)
            .map(|g| g.reward_per_token_stored)
            .unwrap_or(0)
    }

    pub fn stake_token(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.stake_token)
    }

    pub fn reward_token(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.reward_token)
    }
}
