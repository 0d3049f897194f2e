//! Token movements out of the house.

use soroban_sdk::{contractclient, log, token, Address, Env};

use crate::events::RefundDeferredEventData;
use crate::registry::ItemRegistryClient;
use crate::types::Settings;

/// The part of the payment sink the house relies on.
#[allow(dead_code)]
#[contractclient(name = "FallbackSinkClient")]
pub trait FallbackSink {
    fn credit(env: Env, beneficiary: Address, amount: i128) -> i128;
}

/// Pull a bid into the house's custody.
pub fn escrow_bid(env: &Env, settings: &Settings, bidder: &Address, amount: i128) {
    let token_client = token::TokenClient::new(env, &settings.token);
    token_client.transfer(bidder, &env.current_contract_address(), &amount);
}

/// Return `amount` to an outbid `recipient`.
///
/// A recipient that cannot take the transfer gets the amount credited in the
/// payment sink instead, so a refund never fails the bid that triggered it.
pub fn refund(env: &Env, settings: &Settings, recipient: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }

    let house = env.current_contract_address();
    let token_client = token::TokenClient::new(env, &settings.token);
    if let Ok(Ok(())) = token_client.try_transfer(&house, recipient, &amount) {
        return;
    }

    log!(env, "direct refund failed, crediting sink", recipient.clone(), amount);

    token_client.transfer(&house, &settings.sink, &amount);
    FallbackSinkClient::new(env, &settings.sink).credit(recipient, &amount);

    RefundDeferredEventData {
        recipient: recipient.clone(),
        amount,
    }
    .publish(env);
}

/// Hand settled proceeds to the registry's revenue accounting.
pub fn forward_revenue(env: &Env, settings: &Settings, amount: i128) {
    if amount <= 0 {
        return;
    }

    let house = env.current_contract_address();
    let token_client = token::TokenClient::new(env, &settings.token);
    token_client.transfer(&house, &settings.registry, &amount);
    ItemRegistryClient::new(env, &settings.registry).forward_revenue(&house, &amount);
}
