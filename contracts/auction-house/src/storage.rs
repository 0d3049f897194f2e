use soroban_sdk::{Address, Env};

use crate::types::{
    Auction, AuctionParams, Settings, StorageKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// INSTANCE STORAGE
// ============================================================================

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&StorageKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(e: &Env) {
    e.storage().instance().set(&StorageKey::Initialized, &true);
}

pub fn get_admin(e: &Env) -> Option<Address> {
    e.storage().instance().get(&StorageKey::Admin)
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&StorageKey::Admin, admin);
}

pub fn is_paused(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&StorageKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(e: &Env, paused: bool) {
    e.storage().instance().set(&StorageKey::Paused, &paused);
}

pub fn is_locked(e: &Env) -> bool {
    e.storage().instance().has(&StorageKey::Locked)
}

pub fn set_locked(e: &Env, locked: bool) {
    if locked {
        e.storage().instance().set(&StorageKey::Locked, &true);
    } else {
        e.storage().instance().remove(&StorageKey::Locked);
    }
}

// ============================================================================
// PERSISTENT STORAGE
// ============================================================================

fn get_persistent<V>(e: &Env, key: &StorageKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = e.storage().persistent().get::<_, V>(key);
    if value.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    value
}

fn set_persistent<V>(e: &Env, key: &StorageKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    e.storage().persistent().set(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn get_settings(e: &Env) -> Option<Settings> {
    get_persistent(e, &StorageKey::Settings)
}

pub fn set_settings(e: &Env, settings: &Settings) {
    set_persistent(e, &StorageKey::Settings, settings);
}

pub fn get_params(e: &Env) -> Option<AuctionParams> {
    get_persistent(e, &StorageKey::Params)
}

pub fn set_params(e: &Env, params: &AuctionParams) {
    set_persistent(e, &StorageKey::Params, params);
}

/// The current auction, or `None` if the house has never opened one.
pub fn get_auction(e: &Env) -> Option<Auction> {
    get_persistent(e, &StorageKey::Auction)
}

pub fn set_auction(e: &Env, auction: &Auction) {
    set_persistent(e, &StorageKey::Auction, auction);
}
