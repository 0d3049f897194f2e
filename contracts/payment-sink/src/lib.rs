#![no_std]

//! # Payment Sink
//!
//! Holds tokens for recipients that could not be paid directly. A depositor
//! first transfers tokens to the sink and then calls [`PaymentSink::credit`]
//! inside the same invocation; the sink only books credit that is backed by
//! tokens it holds but does not yet owe anyone. Beneficiaries pull their
//! balance out with [`PaymentSink::withdraw`], to themselves or to any other
//! address they choose.

mod errors;
mod events;
mod storage;


use soroban_sdk::{contract, contractimpl, token, Address, Env};

pub use crate::errors::Error;
use crate::events::{CreditedEventData, WithdrawnEventData};

#[contract]
pub struct PaymentSink;

#[contractimpl]
impl PaymentSink {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Bind the sink to the token it holds.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the sink already has a token
    pub fn initialize(e: &Env, token: Address) -> Result<(), Error> {
        if storage::get_token(e).is_some() {
            return Err(Error::AlreadyInitialized);
        }

        storage::set_token(e, &token);
        storage::set_total_owed(e, 0);
        storage::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // CREDIT
    // ========================================================================

    /// Book `amount` for `beneficiary` out of tokens already sent to the sink.
    ///
    /// Returns the beneficiary's new balance.
    ///
    /// # Errors
    /// * `Error::NotInitialized` - If the sink has no token yet
    /// * `Error::InvalidAmount` - If `amount` is not positive
    /// * `Error::UnbackedCredit` - If the unbooked token balance is below `amount`
    pub fn credit(e: &Env, beneficiary: Address, amount: i128) -> Result<i128, Error> {
        let token = token::TokenClient::new(e, &Self::token(e)?);
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let held = token.balance(&e.current_contract_address());
        let owed = storage::get_total_owed(e);
        if held - owed < amount {
            return Err(Error::UnbackedCredit);
        }

        let balance = storage::get_credit(e, &beneficiary) + amount;
        storage::set_credit(e, &beneficiary, balance);
        storage::set_total_owed(e, owed + amount);
        storage::extend_instance_ttl(e);

        CreditedEventData {
            beneficiary,
            amount,
            balance,
        }
        .publish(e);

        Ok(balance)
    }

    /// Pay `amount` of the owner's credit out to `to`.
    ///
    /// Returns what is left of the owner's credit.
    pub fn withdraw(e: &Env, owner: Address, to: Address, amount: i128) -> Result<i128, Error> {
        owner.require_auth();

        let token = token::TokenClient::new(e, &Self::token(e)?);
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let balance = storage::get_credit(e, &owner);
        if balance < amount {
            return Err(Error::InsufficientCredit);
        }

        let remaining = balance - amount;
        storage::set_credit(e, &owner, remaining);
        storage::set_total_owed(e, storage::get_total_owed(e) - amount);
        storage::extend_instance_ttl(e);

        token.transfer(&e.current_contract_address(), &to, &amount);

        WithdrawnEventData { owner, to, amount }.publish(e);

        Ok(remaining)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn balance(e: &Env, owner: Address) -> i128 {
        storage::get_credit(e, &owner)
    }

    pub fn total_owed(e: &Env) -> i128 {
        storage::get_total_owed(e)
    }

    pub fn token(e: &Env) -> Result<Address, Error> {
        storage::get_token(e).ok_or(Error::NotInitialized)
    }
}
