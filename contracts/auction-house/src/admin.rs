use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::storage;

/// Check that `admin` signed the call and is the stored administrator.
pub fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
    admin.require_auth();
    let stored_admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
    if stored_admin != *admin {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Run `f` with the re-entrancy lock held.
///
/// The lock lives in instance storage, so a failed call rolls it back together
/// with everything else the call wrote.
pub fn non_reentrant<T>(env: &Env, f: impl FnOnce() -> Result<T, Error>) -> Result<T, Error> {
    if storage::is_locked(env) {
        return Err(Error::Reentrant);
    }
    storage::set_locked(env, true);
    let result = f();
    storage::set_locked(env, false);
    result
}
