use crate::storage::{is_locked, set_locked};
use soroban_sdk::Env;
use yield_types::Error;

/// Take the strategy lock for the duration of a mutating call.
///
/// A failed call rolls the lock back together with everything else, so only
/// successful paths need to `exit`.
pub fn enter(env: &Env) -> Result<(), Error> {
    if is_locked(env) {
        return Err(Error::ReentrancyRejected);
    }
    set_locked(env, true);
    Ok(())
}

pub fn exit(env: &Env) {
    set_locked(env, false);
}
