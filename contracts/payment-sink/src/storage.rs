use soroban_sdk::{contracttype, Address, Env};

const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Token the sink holds on behalf of its beneficiaries
    Token,
    /// Sum of every outstanding credit
    TotalOwed,
    /// Credit booked for a single beneficiary
    Credit(Address),
}

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

pub fn get_token(e: &Env) -> Option<Address> {
    e.storage().instance().get(&StorageKey::Token)
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&StorageKey::Token, token);
}

pub fn get_total_owed(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&StorageKey::TotalOwed)
        .unwrap_or(0)
}

pub fn set_total_owed(e: &Env, total: i128) {
    e.storage().instance().set(&StorageKey::TotalOwed, &total);
}

pub fn get_credit(e: &Env, owner: &Address) -> i128 {
    let key = StorageKey::Credit(owner.clone());
    let credit = e.storage().persistent().get::<_, i128>(&key);
    if credit.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    credit.unwrap_or(0)
}

pub fn set_credit(e: &Env, owner: &Address, amount: i128) {
    let key = StorageKey::Credit(owner.clone());
    if amount == 0 {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
