//! Item registry interface and the fallible mint wrapper.

use soroban_sdk::{contractclient, log, Address, Env};

/// Calls the house makes into the item registry.
#[allow(dead_code)]
#[contractclient(name = "ItemRegistryClient")]
pub trait ItemRegistry {
    /// Mint the next unissued reserved item to `recipient`, `None` once the pool is empty.
    fn mint_next_reserved(env: Env, recipient: Address) -> Option<u32>;

    fn burn(env: Env, item_id: u32);

    fn transfer(env: Env, from: Address, to: Address, item_id: u32);

    /// Book `amount` of the payment token, already sent by `from`, as revenue.
    fn forward_revenue(env: Env, from: Address, amount: i128);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MintOutcome {
    Minted(u32),
    Exhausted,
    Failed,
}

/// Ask the registry for the next reserved item without letting its failures
/// abort the caller.
pub fn mint_next(env: &Env, registry: &Address, recipient: &Address) -> MintOutcome {
    let client = ItemRegistryClient::new(env, registry);
    match client.try_mint_next_reserved(recipient) {
        Ok(Ok(Some(item_id))) => MintOutcome::Minted(item_id),
        Ok(Ok(None)) => MintOutcome::Exhausted,
        Ok(Err(_)) | Err(_) => {
            log!(env, "registry mint failed", registry.clone());
            MintOutcome::Failed
        }
    }
}
