//! Item registry stand-in that hands out a fixed pool in order.

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env, Vec};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockRegistryError {
    MintDisabled = 900,
    NotOwner = 901,
}

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Pool,
    Owner(u32),
    Burned(u32),
    Revenue,
    MintDisabled,
}

#[contract]
pub struct MockRegistry;

#[contractimpl]
impl MockRegistry {
    pub fn __constructor(env: Env, pool: Vec<u32>) {
        env.storage().instance().set(&MockKey::Pool, &pool);
    }

    pub fn mint_next_reserved(
        env: Env,
        recipient: Address,
    ) -> Result<Option<u32>, MockRegistryError> {
        let disabled: bool = env
            .storage()
            .instance()
            .get(&MockKey::MintDisabled)
            .unwrap_or(false);
        if disabled {
            return Err(MockRegistryError::MintDisabled);
        }

        let mut pool: Vec<u32> = env.storage().instance().get(&MockKey::Pool).unwrap();
        let next = pool.pop_front();
        if let Some(item_id) = next {
            env.storage().instance().set(&MockKey::Pool, &pool);
            env.storage()
                .instance()
                .set(&MockKey::Owner(item_id), &recipient);
        }
        Ok(next)
    }

    pub fn burn(env: Env, item_id: u32) {
        env.storage().instance().remove(&MockKey::Owner(item_id));
        env.storage().instance().set(&MockKey::Burned(item_id), &true);
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        item_id: u32,
    ) -> Result<(), MockRegistryError> {
        from.require_auth();
        if Self::owner_of(env.clone(), item_id) != Some(from) {
            return Err(MockRegistryError::NotOwner);
        }
        env.storage().instance().set(&MockKey::Owner(item_id), &to);
        Ok(())
    }

    pub fn forward_revenue(env: Env, from: Address, amount: i128) {
        from.require_auth();
        let revenue = Self::revenue(env.clone()) + amount;
        env.storage().instance().set(&MockKey::Revenue, &revenue);
    }

    pub fn owner_of(env: Env, item_id: u32) -> Option<Address> {
        env.storage().instance().get(&MockKey::Owner(item_id))
    }

    pub fn is_burned(env: Env, item_id: u32) -> bool {
        env.storage()
            .instance()
            .get(&MockKey::Burned(item_id))
            .unwrap_or(false)
    }

    pub fn revenue(env: Env) -> i128 {
        env.storage().instance().get(&MockKey::Revenue).unwrap_or(0)
    }

    pub fn remaining(env: Env) -> u32 {
        let pool: Vec<u32> = env.storage().instance().get(&MockKey::Pool).unwrap();
        pool.len()
    }

    pub fn set_mint_disabled(env: Env, disabled: bool) {
        env.storage()
            .instance()
            .set(&MockKey::MintDisabled, &disabled);
    }
}
