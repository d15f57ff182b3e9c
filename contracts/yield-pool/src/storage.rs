use soroban_sdk::{contracttype, Address, Env};
use yield_types::{AllowanceValue, Error, PoolConfig, PoolState};

// ============================================================================
// Storage layout:
// - Config and State live in Instance storage (read on every call)
// - Share balances and allowances are one Persistent entry per holder
//   (per holder/spender pair) and are removed once they reach zero
// ============================================================================

/// Storage keys for the pool contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool configuration (Instance storage)
    Config,
    /// Reserves and share supply (Instance storage)
    State,
    /// Pool-share balance: holder -> i128 (Persistent storage)
    Balance(Address),
    /// Pool-share allowance: (owner, spender) -> AllowanceValue (Persistent storage)
    Allowance(Address, Address),
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

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<PoolConfig, Error> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::Uninitialized)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === State ===

pub fn get_state(env: &Env) -> Result<PoolState, Error> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(Error::Uninitialized)
}

pub fn set_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Share balances ===

pub fn get_balance(env: &Env, holder: &Address) -> i128 {
    let key = DataKey::Balance(holder.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, holder: &Address, amount: i128) {
    let key = DataKey::Balance(holder.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent_ttl(env, &key);
    }
}

// === Allowances ===

/// Spendable allowance; expired allowances read as zero
pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    let allowance: AllowanceValue = env.storage().persistent().get(&key).unwrap_or_default();
    if allowance.expiration_ledger < env.ledger().sequence() {
        AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        }
    } else {
        allowance
    }
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, allowance: &AllowanceValue) {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    if allowance.amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, allowance);
        extend_persistent_ttl(env, &key);
    }
}
