#![no_std]

mod collaborators;
mod guard;
mod storage;

use collaborators::*;
use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Symbol};
use storage::{get_config, has_config, set_config};
use yield_types::{add, ensure_pullable, Error, StrategyConfig, MINIMUM_DEPOSIT};

/// Routes two-asset deposits through pool, staking and vault.
///
/// The orchestrator holds the pool shares of every user in transit, is the
/// staking operator for all of them and is the sole manager of the vault.
#[contract]
pub struct StrategyOrchestrator;

#[contractimpl]
impl StrategyOrchestrator {
    /// Bind the strategy to its pool, staking and vault contracts
    ///
    /// Claims the vault as manager; the vault must be uninitialized.
    pub fn initialize(env: Env, pool: Address, staking: Address, vault: Address) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if staking_stake_token(&env, &staking) != pool {
            panic!("Staking must stake pool shares");
        }

        let config = StrategyConfig {
            token0: pool_token0(&env, &pool),
            token1: pool_token1(&env, &pool),
            reward_token: staking_reward_token(&env, &staking),
            pool,
            staking,
            vault,
            minimum_deposit: MINIMUM_DEPOSIT,
        };
        vault_initialize(&env, &config.vault, &env.current_contract_address());
        set_config(&env, &config);

        env.events().publish(
            (Symbol::new(&env, "initialized"),),
            (config.pool, config.staking, config.vault),
        );
        Ok(())
    }

    /// Deposit both pool assets, stake the minted pool shares for `user` and
    /// issue vault shares
    ///
    /// `user` must have approved the strategy on both asset contracts.
    ///
    /// # Returns
    /// Vault shares credited to `user`
    pub fn deposit(env: Env, user: Address, amount0: i128, amount1: i128) -> Result<i128, Error> {
        user.require_auth();
        let config = get_config(&env)?;
        guard::enter(&env)?;

        if amount0 < config.minimum_deposit || amount1 < config.minimum_deposit {
            return Err(Error::InsufficientDeposit);
        }

        let strategy = env.current_contract_address();
        ensure_pullable(&env, &config.token0, &user, &strategy, amount0)?;
        ensure_pullable(&env, &config.token1, &user, &strategy, amount1)?;

        // Valuation before this deposit's stake is added
        let total_assets = staking_staked_by(&env, &config.staking, &strategy);

        let token0 = token::Client::new(&env, &config.token0);
        let token1 = token::Client::new(&env, &config.token1);
        token0.transfer_from(&strategy, &user, &strategy, &amount0);
        token1.transfer_from(&strategy, &user, &strategy, &amount1);

        let expiration = env.ledger().sequence();
        token0.approve(&strategy, &config.pool, &amount0, &expiration);
        token1.approve(&strategy, &config.pool, &amount1, &expiration);
        let pool_shares = pool_mint(&env, &config.pool, &strategy, amount0, amount1);

        token::Client::new(&env, &config.pool).approve(&strategy, &config.staking, &pool_shares, &expiration);
        staking_stake(&env, &config.staking, &strategy, &user, pool_shares);

        let vault_shares = vault_deposit(&env, &config.vault, pool_shares, &user, total_assets);

        log!(&env, "deposit", user, pool_shares, vault_shares);
        env.events().publish(
            (Symbol::new(&env, "deposit"), user),
            (amount0, amount1, pool_shares, vault_shares),
        );

        guard::exit(&env);
        Ok(vault_shares)
    }

    /// Redeem `shares` vault shares of `user`: unstake the pool-share
    /// equivalent, pay out accrued rewards and burn the pool shares back into
    /// both assets
    ///
    /// # Returns
    /// (amount0, amount1, reward) - Assets and reward paid to `user`
    pub fn withdraw(env: Env, user: Address, shares: i128) -> Result<(i128, i128, i128), Error> {
        user.require_auth();
        let config = get_config(&env)?;
        guard::enter(&env)?;

        if shares <= 0 || vault_balance(&env, &config.vault, &user) < shares {
            return Err(Error::InsufficientShares);
        }

        let strategy = env.current_contract_address();
        let total_assets = staking_staked_by(&env, &config.staking, &strategy);
        let pool_shares = vault_withdraw(&env, &config.vault, shares, &user, total_assets);
        if pool_shares == 0 {
            return Err(Error::InsufficientShares);
        }

        // Vault shares moved away from the account that staked them
        if staking_balance(&env, &config.staking, &strategy, &user) < pool_shares {
            log!(&env, "stake out of sync with vault shares", user, pool_shares);
            return Err(Error::InsufficientStake);
        }

        staking_unstake(&env, &config.staking, &strategy, &user, pool_shares);
        let reward = staking_harvest(&env, &config.staking, &strategy, &user);
        let (amount0, amount1) = pool_burn(&env, &config.pool, &strategy, &user, pool_shares);

        env.events().publish(
            (Symbol::new(&env, "withdraw"), user),
            (shares, amount0, amount1, reward),
        );

        guard::exit(&env);
        Ok((amount0, amount1, reward))
    }

    /// Pay the staking rewards accrued to `user`; zero when nothing accrued
    pub fn claim_rewards(env: Env, user: Address) -> Result<i128, Error> {
        user.require_auth();
        let config = get_config(&env)?;
        guard::enter(&env)?;

        let strategy = env.current_contract_address();
        let reward = staking_harvest(&env, &config.staking, &strategy, &user);

        env.events()
            .publish((Symbol::new(&env, "claim"), user), reward);

        guard::exit(&env);
        Ok(reward)
    }

    /// Value of the position of `account`
    ///
    /// # Returns
    /// (amount0, amount1, reward) - Pool quote of the staked pool shares
    /// (plus the reward when it is paid in pool shares) and the raw
    /// harvestable reward. Zeros when uninitialized.
    pub fn get_user_rewards(env: Env, account: Address) -> Result<(i128, i128, i128), Error> {
        let Ok(config) = get_config(&env) else {
            return Ok((0, 0, 0));
        };
        let strategy = env.current_contract_address();
        let staked = staking_balance(&env, &config.staking, &strategy, &account);
        let reward = staking_accrued_reward(&env, &config.staking, &strategy, &account);

        let position = if config.reward_token == config.pool {
            add(staked, reward)?
        } else {
            staked
        };
        let (amount0, amount1) = pool_quote(&env, &config.pool, position);
        Ok((amount0, amount1, reward))
    }

    // === View Functions ===

    pub fn is_initialized(env: Env) -> bool {
        has_config(&env)
    }

    /// Get strategy configuration
    pub fn get_config(env: Env) -> Result<StrategyConfig, Error> {
        get_config(&env)
    }

    pub fn pool(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.pool)
    }

    pub fn staking(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.staking)
    }

    pub fn vault(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.vault)
    }

    pub fn minimum_deposit(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.minimum_deposit)
    }

    /// Pool shares staked by the strategy on behalf of all users
    pub fn total_assets(env: Env) -> i128 {
        match get_config(&env) {
            Ok(config) => staking_staked_by(&env, &config.staking, &env.current_contract_address()),
            Err(_) => 0,
        }
    }

    /// Pool shares staked by everyone, direct stakers included
    pub fn total_staked(env: Env) -> i128 {
        match get_config(&env) {
            Ok(config) => staking_total_staked(&env, &config.staking),
            Err(_) => 0,
        }
    }

    pub fn vault_balance(env: Env, account: Address) -> i128 {
        match get_config(&env) {
            Ok(config) => vault_balance(&env, &config.vault, &account),
            Err(_) => 0,
        }
    }

    /// Pool shares staked through the strategy for `account`
    pub fn staked_balance(env: Env, account: Address) -> i128 {
        match get_config(&env) {
            Ok(config) => {
                staking_balance(&env, &config.staking, &env.current_contract_address(), &account)
            }
            Err(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{token, Address, Env};
    use yield_pool::{LiquidityPool, LiquidityPoolClient};
    use yield_staking::{RewardStaking, RewardStakingClient};
    use yield_vault::{VaultAccounting, VaultAccountingClient};

    struct TestStrategy<'a> {
        strategy: StrategyOrchestratorClient<'a>,
        pool: LiquidityPoolClient<'a>,
        staking: RewardStakingClient<'a>,
        vault: VaultAccountingClient<'a>,
        token0: token::Client<'a>,
        token1: token::Client<'a>,
        admin0: token::StellarAssetClient<'a>,
        admin1: token::StellarAssetClient<'a>,
    }

    fn create_token<'a>(env: &Env, admin: &Address) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
        let sac = env.register_stellar_asset_contract_v2(admin.clone());
        (
            token::Client::new(env, &sac.address()),
            token::StellarAssetClient::new(env, &sac.address()),
        )
    }

    /// Deploy assets, pool, staking (rewards in pool shares) and vault,
    /// leaving the strategy unbound
    fn deploy<'a>(env: &Env) -> TestStrategy<'a> {
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(env);
        let (token0, admin0) = create_token(env, &admin);
        let (token1, admin1) = create_token(env, &admin);

        let pool = LiquidityPoolClient::new(env, &env.register(LiquidityPool, ()));
        pool.initialize(&token0.address, &token1.address);

        let staking = RewardStakingClient::new(env, &env.register(RewardStaking, ()));
        staking.initialize(&pool.address, &pool.address);

        let vault = VaultAccountingClient::new(env, &env.register(VaultAccounting, ()));
        let strategy = StrategyOrchestratorClient::new(env, &env.register(StrategyOrchestrator, ()));

        TestStrategy {
            strategy,
            pool,
            staking,
            vault,
            token0,
            token1,
            admin0,
            admin1,
        }
    }

    fn setup<'a>(env: &Env) -> TestStrategy<'a> {
        let t = deploy(env);
        t.strategy
            .initialize(&t.pool.address, &t.staking.address, &t.vault.address);
        t
    }

    /// Mint `amount` of both assets to `user` and approve the strategy for `approved`
    fn fund(t: &TestStrategy, user: &Address, amount: i128, approved: i128) {
        t.admin0.mint(user, &amount);
        t.admin1.mint(user, &amount);
        t.token0.approve(user, &t.strategy.address, &approved, &1000);
        t.token1.approve(user, &t.strategy.address, &approved, &1000);
    }

    /// Mint pool shares directly from the pool and send them to staking
    fn donate_rewards(t: &TestStrategy, donor: &Address, amount: i128) -> i128 {
        t.admin0.mint(donor, &amount);
        t.admin1.mint(donor, &amount);
        t.token0.approve(donor, &t.pool.address, &amount, &1000);
        t.token1.approve(donor, &t.pool.address, &amount, &1000);
        let shares = t.pool.mint(donor, &amount, &amount);
        t.pool.transfer(donor, &t.staking.address, &shares);
        shares
    }

    /// user1 and user2 each deposit 10000 of both assets, then user3 donates
    /// 10000 pool shares as rewards
    fn two_depositors_and_donation<'a>(env: &Env) -> (TestStrategy<'a>, Address, Address) {
        let t = setup(env);
        let user1 = Address::generate(env);
        let user2 = Address::generate(env);
        let user3 = Address::generate(env);
        fund(&t, &user1, 10_000, 10_000);
        fund(&t, &user2, 10_000, 10_000);

        t.strategy.deposit(&user1, &10_000, &10_000);
        t.strategy.deposit(&user2, &10_000, &10_000);
        assert_eq!(donate_rewards(&t, &user3, 10_000), 10_000);
        (t, user1, user2)
    }

    fn assert_ledgers_consistent(t: &TestStrategy, users: &[Address]) {
        let mut vault_sum = 0;
        let mut stake_sum = 0;
        for user in users.iter() {
            vault_sum += t.vault.balance(user);
            stake_sum += t.strategy.staked_balance(user);
        }
        assert_eq!(vault_sum, t.vault.total_shares());
        assert_eq!(stake_sum, t.staking.total_staked());
        assert_eq!(stake_sum, t.strategy.total_assets());
    }

    // === Initialization Tests ===

    #[test]
    fn test_initialize_binds_collaborators() {
        let env = Env::default();
        let t = setup(&env);

        assert!(t.strategy.is_initialized());
        assert_eq!(t.strategy.pool(), t.pool.address);
        assert_eq!(t.strategy.staking(), t.staking.address);
        assert_eq!(t.strategy.vault(), t.vault.address);
        assert_eq!(t.strategy.minimum_deposit(), MINIMUM_DEPOSIT);
        assert_eq!(t.vault.manager(), t.strategy.address);

        let config = t.strategy.get_config();
        assert_eq!(config.token0, t.token0.address);
        assert_eq!(config.token1, t.token1.address);
        assert_eq!(config.reward_token, t.pool.address);
    }

    #[test]
    fn test_initialize_twice_fails() {
        let env = Env::default();
        let t = setup(&env);
        assert_eq!(
            t.strategy
                .try_initialize(&t.pool.address, &t.staking.address, &t.vault.address),
            Err(Ok(Error::AlreadyInitialized))
        );
    }

    #[test]
    fn test_uninitialized_strategy() {
        let env = Env::default();
        let t = deploy(&env);
        let user = Address::generate(&env);
        fund(&t, &user, 10_000, 10_000);

        assert!(!t.strategy.is_initialized());
        assert_eq!(
            t.strategy.try_deposit(&user, &10_000, &10_000),
            Err(Ok(Error::Uninitialized))
        );
        assert_eq!(t.strategy.try_withdraw(&user, &1), Err(Ok(Error::Uninitialized)));
        assert_eq!(t.strategy.try_claim_rewards(&user), Err(Ok(Error::Uninitialized)));
        assert_eq!(t.strategy.get_user_rewards(&user), (0, 0, 0));
        assert_eq!(t.strategy.total_assets(), 0);
        assert_eq!(t.strategy.vault_balance(&user), 0);
    }

    // === Deposit Tests ===

    #[test]
    fn test_first_deposit() {
        let env = Env::default();
        let t = setup(&env);
        let user = Address::generate(&env);
        fund(&t, &user, 10_000, 10_000);

        let shares = t.strategy.deposit(&user, &10_000, &10_000);

        // sqrt(10000 * 10000) - 1000 locked pool shares, vault 1:1
        assert_eq!(shares, 9_000);
        assert_eq!(t.strategy.vault_balance(&user), 9_000);
        assert_eq!(t.strategy.staked_balance(&user), 9_000);
        assert_eq!(t.strategy.total_assets(), 9_000);
        assert_eq!(t.pool.balance(&t.staking.address), 9_000);
        assert_eq!(t.pool.balance(&t.strategy.address), 0);
        assert_eq!(t.token0.balance(&user), 0);
        assert_eq!(t.token0.balance(&t.pool.address), 10_000);
        assert_eq!(t.token1.balance(&t.strategy.address), 0);
        assert_ledgers_consistent(&t, &[user]);
    }

    #[test]
    fn test_second_deposit_priced_at_total_assets() {
        let env = Env::default();
        let t = setup(&env);
        let user1 = Address::generate(&env);
        let user2 = Address::generate(&env);
        fund(&t, &user1, 10_000, 10_000);
        fund(&t, &user2, 10_000, 10_000);

        t.strategy.deposit(&user1, &10_000, &10_000);
        let shares = t.strategy.deposit(&user2, &10_000, &10_000);

        assert_eq!(shares, 10_000);
        assert_eq!(t.strategy.total_assets(), 19_000);
        assert_ledgers_consistent(&t, &[user1, user2]);
    }

    #[test]
    fn test_deposit_below_minimum() {
        let env = Env::default();
        let t = setup(&env);
        let user = Address::generate(&env);
        fund(&t, &user, 10_000, 10_000);

        assert_eq!(
            t.strategy.try_deposit(&user, &10, &10),
            Err(Ok(Error::InsufficientDeposit))
        );
        assert_eq!(
            t.strategy.try_deposit(&user, &10_000, &999),
            Err(Ok(Error::InsufficientDeposit))
        );
        assert_eq!(t.strategy.try_deposit(&user, &0, &-1), Err(Ok(Error::InsufficientDeposit)));
    }

    #[test]
    fn test_deposit_without_balance() {
        let env = Env::default();
        let t = setup(&env);
        let user = Address::generate(&env);
        fund(&t, &user, 5_000, 10_000);

        assert_eq!(
            t.strategy.try_deposit(&user, &10_000, &10_000),
            Err(Ok(Error::InsufficientBalanceOrAllowance))
        );
        assert_eq!(t.token0.balance(&user), 5_000);
        assert_eq!(t.token1.balance(&user), 5_000);
    }

    #[test]
    fn test_deposit_without_allowance() {
        let env = Env::default();
        let t = setup(&env);
        let user = Address::generate(&env);
        fund(&t, &user, 10_000, 9_999);

        assert_eq!(
            t.strategy.try_deposit(&user, &10_000, &10_000),
            Err(Ok(Error::InsufficientBalanceOrAllowance))
        );
    }

    #[test]
    fn test_failed_deposit_rolls_back() {
        let env = Env::default();
        let t = setup(&env);
        let user = Address::generate(&env);
        fund(&t, &user, 1_000, 1_000);

        // Passes the deposit floor but mints no pool shares past the lock
        assert!(t.strategy.try_deposit(&user, &1_000, &1_000).is_err());

        assert_eq!(t.token0.balance(&user), 1_000);
        assert_eq!(t.token1.balance(&user), 1_000);
        assert_eq!(t.token0.balance(&t.strategy.address), 0);
        assert_eq!(t.pool.reserves(), (0, 0));
        assert_eq!(t.pool.total_supply(), 0);
        assert_eq!(t.staking.total_staked(), 0);
        assert_eq!(t.vault.total_shares(), 0);
    }

    #[test]
    fn test_locked_strategy_rejects_calls() {
        let env = Env::default();
        let t = setup(&env);
        let user = Address::generate(&env);
        fund(&t, &user, 10_000, 10_000);

        env.as_contract(&t.strategy.address, || storage::set_locked(&env, true));

        assert_eq!(
            t.strategy.try_deposit(&user, &10_000, &10_000),
            Err(Ok(Error::ReentrancyRejected))
        );
        assert_eq!(t.strategy.try_claim_rewards(&user), Err(Ok(Error::ReentrancyRejected)));
    }

    #[test]
    fn test_lock_released_after_success() {
        let env = Env::default();
        let t = setup(&env);
        let user = Address::generate(&env);
        fund(&t, &user, 20_000, 20_000);

        t.strategy.deposit(&user, &10_000, &10_000);
        t.strategy.deposit(&user, &10_000, &10_000);

        let locked = env.as_contract(&t.strategy.address, || storage::is_locked(&env));
        assert!(!locked);
    }

    // === Withdraw Tests ===

    #[test]
    fn test_full_withdraw_round_trip() {
        let env = Env::default();
        let t = setup(&env);
        let user = Address::generate(&env);
        fund(&t, &user, 10_000, 10_000);

        let shares = t.strategy.deposit(&user, &10_000, &10_000);
        let (amount0, amount1, reward) = t.strategy.withdraw(&user, &shares);

        // The locked minimum liquidity stays in the pool
        assert_eq!((amount0, amount1, reward), (9_000, 9_000, 0));
        assert_eq!(t.token0.balance(&user), 9_000);
        assert_eq!(t.token1.balance(&user), 9_000);
        assert_eq!(t.strategy.vault_balance(&user), 0);
        assert_eq!(t.strategy.staked_balance(&user), 0);
        assert_eq!(t.strategy.total_assets(), 0);
        assert_eq!(t.vault.total_shares(), 0);
        assert_eq!(t.pool.balance(&t.strategy.address), 0);
    }

    #[test]
    fn test_partial_withdraw() {
        let env = Env::default();
        let t = setup(&env);
        let user = Address::generate(&env);
        fund(&t, &user, 10_000, 10_000);

        t.strategy.deposit(&user, &10_000, &10_000);
        let (amount0, amount1, _) = t.strategy.withdraw(&user, &3_000);

        assert_eq!((amount0, amount1), (3_000, 3_000));
        assert_eq!(t.strategy.vault_balance(&user), 6_000);
        assert_eq!(t.strategy.staked_balance(&user), 6_000);
        assert_ledgers_consistent(&t, &[user]);
    }

    #[test]
    fn test_withdraw_more_than_owned() {
        let env = Env::default();
        let t = setup(&env);
        let user = Address::generate(&env);
        fund(&t, &user, 10_000, 10_000);

        let shares = t.strategy.deposit(&user, &10_000, &10_000);

        assert_eq!(
            t.strategy.try_withdraw(&user, &(shares + 1)),
            Err(Ok(Error::InsufficientShares))
        );
        assert_eq!(t.strategy.try_withdraw(&user, &0), Err(Ok(Error::InsufficientShares)));
        assert_eq!(t.strategy.vault_balance(&user), shares);
    }

    #[test]
    fn test_withdraw_of_transferred_shares_fails_closed() {
        let env = Env::default();
        let t = setup(&env);
        let user1 = Address::generate(&env);
        let user2 = Address::generate(&env);
        fund(&t, &user1, 10_000, 10_000);

        t.strategy.deposit(&user1, &10_000, &10_000);
        t.vault.transfer(&user1, &user2, &4_000);

        // user2 holds vault shares but nothing is staked for them
        assert_eq!(
            t.strategy.try_withdraw(&user2, &4_000),
            Err(Ok(Error::InsufficientStake))
        );
        assert_eq!(t.vault.balance(&user2), 4_000);
        assert_eq!(t.vault.total_shares(), 9_000);
        assert_eq!(t.strategy.staked_balance(&user1), 9_000);
    }

    // === Reward Tests ===

    #[test]
    fn test_donation_split_by_stake() {
        let env = Env::default();
        let (t, user1, user2) = two_depositors_and_donation(&env);

        // 10000 rewards over 19000 staked, rounded down per account
        assert_eq!(t.staking.accrued_reward(&t.strategy.address, &user1), 4_736);
        assert_eq!(t.staking.accrued_reward(&t.strategy.address, &user2), 5_263);
        assert_ledgers_consistent(&t, &[user1, user2]);
    }

    #[test]
    fn test_user_rewards_increase_after_donation() {
        let env = Env::default();
        let t = setup(&env);
        let user1 = Address::generate(&env);
        let user2 = Address::generate(&env);
        let user3 = Address::generate(&env);
        fund(&t, &user1, 10_000, 10_000);
        fund(&t, &user2, 10_000, 10_000);

        t.strategy.deposit(&user1, &10_000, &10_000);
        t.strategy.deposit(&user2, &10_000, &10_000);
        let before1 = t.strategy.get_user_rewards(&user1);
        let before2 = t.strategy.get_user_rewards(&user2);
        assert_eq!(before1, (9_000, 9_000, 0));
        assert_eq!(before2, (10_000, 10_000, 0));

        donate_rewards(&t, &user3, 10_000);

        let after1 = t.strategy.get_user_rewards(&user1);
        let after2 = t.strategy.get_user_rewards(&user2);
        assert_eq!(after1, (13_736, 13_736, 4_736));
        assert!(after2.0 > before2.0 && after2.1 > before2.1 && after2.2 > before2.2);
    }

    #[test]
    fn test_claim_rewards() {
        let env = Env::default();
        let (t, user1, user2) = two_depositors_and_donation(&env);

        assert_eq!(t.strategy.claim_rewards(&user1), 4_736);
        assert_eq!(t.pool.balance(&user1), 4_736);
        assert_eq!(t.strategy.claim_rewards(&user1), 0);
        assert_eq!(t.strategy.claim_rewards(&user2), 5_263);

        // Claiming leaves the stakes in place
        assert_eq!(t.strategy.staked_balance(&user1), 9_000);
        assert_ledgers_consistent(&t, &[user1, user2]);
    }

    #[test]
    fn test_claim_without_deposit_returns_zero() {
        let env = Env::default();
        let t = setup(&env);
        let user = Address::generate(&env);
        assert_eq!(t.strategy.claim_rewards(&user), 0);
    }

    #[test]
    fn test_withdraw_harvests_on_exit() {
        let env = Env::default();
        let (t, user1, user2) = two_depositors_and_donation(&env);

        let (amount0, amount1, reward) = t.strategy.withdraw(&user1, &9_000);

        assert_eq!((amount0, amount1, reward), (9_000, 9_000, 4_736));
        assert_eq!(t.token0.balance(&user1), 9_000);
        assert_eq!(t.pool.balance(&user1), 4_736);
        assert_eq!(t.strategy.get_user_rewards(&user1), (0, 0, 0));
        // user2's reward is unaffected by user1 leaving
        assert_eq!(t.staking.accrued_reward(&t.strategy.address, &user2), 5_263);
        assert_ledgers_consistent(&t, &[user1, user2]);
    }

    #[test]
    fn test_reward_per_token_monotonic_across_flows() {
        let env = Env::default();
        let (t, user1, user2) = two_depositors_and_donation(&env);
        let mut last = t.staking.reward_per_token();

        t.strategy.claim_rewards(&user1);
        assert!(t.staking.reward_per_token() >= last);
        last = t.staking.reward_per_token();

        t.strategy.withdraw(&user2, &5_000);
        assert!(t.staking.reward_per_token() >= last);
        last = t.staking.reward_per_token();

        donate_rewards(&t, &Address::generate(&env), 2_000);
        t.strategy.claim_rewards(&user2);
        assert!(t.staking.reward_per_token() > last);
    }
}
