use soroban_sdk::{contracttype, Env};
use yield_types::{Error, StrategyConfig};

/// Storage keys for the strategy contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Collaborator bindings (Instance storage)
    Config,
    /// Present while a mutating call is in progress (Instance storage)
    Locked,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<StrategyConfig, Error> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::Uninitialized)
}

pub fn set_config(env: &Env, config: &StrategyConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Locked)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}
