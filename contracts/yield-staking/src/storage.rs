use soroban_sdk::{contracttype, Address, Env};
use yield_types::{Error, StakeAccount, StakeKey, StakingConfig, StakingGlobal};

/// Storage keys for the staking contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Staking configuration (Instance storage)
    Config,
    /// Accumulator and totals (Instance storage)
    Global,
    /// Stake position: (operator, account) -> StakeAccount (Persistent storage)
    Account(StakeKey),
    /// Sum of stakes supplied by an operator (Persistent storage)
    OperatorTotal(Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<StakingConfig, Error> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::Uninitialized)
}

pub fn set_config(env: &Env, config: &StakingConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

pub fn get_global(env: &Env) -> Result<StakingGlobal, Error> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Global)
        .ok_or(Error::Uninitialized)
}

pub fn set_global(env: &Env, global: &StakingGlobal) {
    env.storage().instance().set(&DataKey::Global, global);
    extend_instance_ttl(env);
}

/// Get a stake position (returns default if none)
pub fn get_account(env: &Env, key: &StakeKey) -> StakeAccount {
    let key = DataKey::Account(key.clone());
    env.storage().persistent().get(&key).unwrap_or_default()
}

/// Set a stake position. Positions are kept after a full exit so the
/// reward checkpoint survives.
pub fn set_account(env: &Env, key: &StakeKey, account: &StakeAccount) {
    let key = DataKey::Account(key.clone());
    env.storage().persistent().set(&key, account);
    extend_persistent_ttl(env, &key);
}

pub fn get_operator_total(env: &Env, operator: &Address) -> i128 {
    let key = DataKey::OperatorTotal(operator.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_operator_total(env: &Env, operator: &Address, amount: i128) {
    let key = DataKey::OperatorTotal(operator.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent_ttl(env, &key);
    }
}
