#![no_std]

//! # Auction House
//!
//! Runs one timed auction at a time over a registry's reserved item pool.
//! Each lot is minted to the house when its auction opens. When the window
//! closes the lot is either transferred to the winning bidder, with the bid
//! forwarded to the registry as revenue, or burned if nobody bid.
//!
//! The house starts paused. Unpausing opens the first auction, and every
//! [`AuctionHouse::settle_current_and_create_next`] call settles the expired
//! lot and opens the next one. Once the pool runs dry, or the registry refuses
//! to mint, the house pauses itself instead.
//!
//! ## Modules
//!
//! - [`state`] holds the clock-independent auction rules.
//! - `payments` escrows bids and delivers refunds and revenue.
//! - `registry` is the client side of the item registry.

mod admin;
mod errors;
mod events;
mod payments;
mod registry;
pub mod state;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, log, Address, Env};

pub use crate::errors::Error;
use crate::events::*;
use crate::registry::{ItemRegistryClient, MintOutcome};
use crate::state::Settlement;
pub use crate::types::{Auction, AuctionParams, HaltReason, Phase, Settings};

/// Longest auction window an admin can configure (30 days).
pub const MAX_DURATION: u64 = 30 * 24 * 60 * 60;

/// Longest anti-snipe buffer an admin can configure (1 day).
pub const MAX_TIME_BUFFER: u64 = 24 * 60 * 60;

#[contract]
pub struct AuctionHouse;

#[contractimpl]
impl AuctionHouse {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Configure the house. It stays paused until the admin unpauses it.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the house has already been initialized
    /// * `Error::InvalidDuration` - If `duration` is zero or above `MAX_DURATION`
    /// * `Error::InvalidTimeBuffer` - If `time_buffer` is above `MAX_TIME_BUFFER`
    /// * `Error::InvalidReservePrice` - If `reserve_price` is negative
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        e: &Env,
        admin: Address,
        token: Address,
        registry: Address,
        sink: Address,
        time_buffer: u64,
        reserve_price: i128,
        min_bid_increment_percentage: u32,
        duration: u64,
    ) -> Result<(), Error> {
        if storage::is_initialized(e) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        check_duration(duration)?;
        check_time_buffer(time_buffer)?;
        if reserve_price < 0 {
            return Err(Error::InvalidReservePrice);
        }

        storage::set_admin(e, &admin);
        storage::set_settings(
            e,
            &Settings {
                token,
                registry,
                sink,
            },
        );
        storage::set_params(
            e,
            &AuctionParams {
                time_buffer,
                reserve_price,
                min_bid_increment_percentage,
                duration,
            },
        );
        storage::set_paused(e, true);
        storage::set_initialized(e);
        storage::extend_instance_ttl(e);

        Ok(())
    }

    // ========================================================================
    // BIDDING
    // ========================================================================

    /// Bid `amount` on `item_id`, which must be the lot currently up.
    ///
    /// The bid is escrowed in the house and the previous leader is refunded.
    ///
    /// # Errors
    /// * `Error::Paused` - If the house is paused
    /// * `Error::NotStarted` - If no auction has been opened yet
    /// * `Error::NotCurrentItem`, `Error::AuctionExpired`, `Error::InvalidAmount`,
    ///   `Error::BelowReserve`, `Error::BelowMinIncrement` - If the bid does not qualify
    pub fn create_bid(e: &Env, bidder: Address, item_id: u32, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        admin::non_reentrant(e, || {
            let settings = Self::load_settings(e)?;
            if storage::is_paused(e) {
                return Err(Error::Paused);
            }

            let params = Self::load_params(e)?;
            let mut auction = storage::get_auction(e).ok_or(Error::NotStarted)?;
            let now = e.ledger().timestamp();
            auction.validate_bid(&params, item_id, amount, now)?;

            let receipt = auction.record_bid(bidder.clone(), amount, now, params.time_buffer);
            storage::set_auction(e, &auction);

            payments::escrow_bid(e, &settings, &bidder, amount);
            if let Some((previous, refund)) = receipt.displaced {
                payments::refund(e, &settings, &previous, refund);
            }

            AuctionBidEventData {
                item_id,
                bidder,
                amount,
                extended: receipt.extended,
            }
            .publish(e);

            if receipt.extended {
                log!(e, "auction extended", item_id, auction.end_time);
                AuctionExtendedEventData {
                    item_id,
                    end_time: auction.end_time,
                }
                .publish(e);
            }

            storage::extend_instance_ttl(e);
            Ok(())
        })
    }

    // ========================================================================
    // SETTLEMENT
    // ========================================================================

    /// Settle the expired lot while the house is paused. Anyone may call it.
    ///
    /// # Errors
    /// * `Error::NotPaused` - If the house is running; use
    ///   [`AuctionHouse::settle_current_and_create_next`] instead
    /// * `Error::NotStarted`, `Error::AlreadySettled`, `Error::NotYetExpired`
    pub fn settle_auction(e: &Env) -> Result<(), Error> {
        admin::non_reentrant(e, || {
            let settings = Self::load_settings(e)?;
            if !storage::is_paused(e) {
                return Err(Error::NotPaused);
            }
            Self::settle(e, &settings)
        })
    }

    /// Settle the expired lot and open an auction for the next reserved item.
    ///
    /// If the registry has nothing left to mint or fails, the house pauses
    /// itself and the settlement still stands.
    ///
    /// # Errors
    /// * `Error::Paused` - If the house is paused; use [`AuctionHouse::settle_auction`]
    /// * `Error::NotStarted`, `Error::AlreadySettled`, `Error::NotYetExpired`
    pub fn settle_current_and_create_next(e: &Env) -> Result<(), Error> {
        admin::non_reentrant(e, || {
            let settings = Self::load_settings(e)?;
            if storage::is_paused(e) {
                return Err(Error::Paused);
            }
            Self::settle(e, &settings)?;
            Self::create_next(e, &settings)
        })
    }

    // ========================================================================
    // ADMINISTRATION
    // ========================================================================

    /// Stop bidding. Settlement stays available through [`AuctionHouse::settle_auction`].
    pub fn pause(e: &Env, admin: Address) -> Result<(), Error> {
        admin::require_admin(e, &admin)?;
        if storage::is_paused(e) {
            return Err(Error::Paused);
        }

        storage::set_paused(e, true);
        PausedEventData { paused: true }.publish(e);

        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Resume bidding, opening a fresh auction if the last one is settled or
    /// none was ever opened.
    pub fn unpause(e: &Env, admin: Address) -> Result<(), Error> {
        admin::require_admin(e, &admin)?;

        admin::non_reentrant(e, || {
            let settings = Self::load_settings(e)?;
            if !storage::is_paused(e) {
                return Err(Error::NotPaused);
            }

            storage::set_paused(e, false);
            PausedEventData { paused: false }.publish(e);

            let needs_auction = match storage::get_auction(e) {
                None => true,
                Some(auction) => auction.settled,
            };
            if needs_auction {
                Self::create_next(e, &settings)?;
            }

            storage::extend_instance_ttl(e);
            Ok(())
        })
    }

    /// # Errors
    /// * `Error::InvalidTimeBuffer` - If `time_buffer` is above `MAX_TIME_BUFFER`
    pub fn set_time_buffer(e: &Env, admin: Address, time_buffer: u64) -> Result<(), Error> {
        admin::require_admin(e, &admin)?;
        check_time_buffer(time_buffer)?;

        let mut params = Self::load_params(e)?;
        params.time_buffer = time_buffer;
        storage::set_params(e, &params);

        TimeBufferUpdatedEventData { time_buffer }.publish(e);
        Ok(())
    }

    pub fn set_reserve_price(e: &Env, admin: Address, reserve_price: i128) -> Result<(), Error> {
        admin::require_admin(e, &admin)?;
        if reserve_price < 0 {
            return Err(Error::InvalidReservePrice);
        }

        let mut params = Self::load_params(e)?;
        params.reserve_price = reserve_price;
        storage::set_params(e, &params);

        ReserveUpdatedEventData { reserve_price }.publish(e);
        Ok(())
    }

    pub fn set_min_bid_increment_percentage(
        e: &Env,
        admin: Address,
        min_bid_increment_percentage: u32,
    ) -> Result<(), Error> {
        admin::require_admin(e, &admin)?;

        let mut params = Self::load_params(e)?;
        params.min_bid_increment_percentage = min_bid_increment_percentage;
        storage::set_params(e, &params);

        IncrementUpdatedEventData {
            min_bid_increment_percentage,
        }
        .publish(e);
        Ok(())
    }

    /// Change the window length of auctions opened from now on.
    ///
    /// # Errors
    /// * `Error::InvalidDuration` - If `duration` is zero or above `MAX_DURATION`
    pub fn set_duration(e: &Env, admin: Address, duration: u64) -> Result<(), Error> {
        admin::require_admin(e, &admin)?;
        check_duration(duration)?;

        let mut params = Self::load_params(e)?;
        params.duration = duration;
        storage::set_params(e, &params);

        DurationUpdatedEventData { duration }.publish(e);
        Ok(())
    }

    /// Hand administration over to `new_admin`.
    pub fn set_admin(e: &Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        admin::require_admin(e, &admin)?;

        storage::set_admin(e, &new_admin);
        AdminChangedEventData {
            previous: admin,
            admin: new_admin,
        }
        .publish(e);

        storage::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_auction(e: &Env) -> Option<Auction> {
        storage::get_auction(e)
    }

    pub fn get_phase(e: &Env) -> Phase {
        Phase::of(storage::get_auction(e).as_ref(), e.ledger().timestamp())
    }

    pub fn get_params(e: &Env) -> Result<AuctionParams, Error> {
        Self::load_params(e)
    }

    pub fn get_settings(e: &Env) -> Result<Settings, Error> {
        Self::load_settings(e)
    }

    pub fn get_admin(e: &Env) -> Result<Address, Error> {
        storage::get_admin(e).ok_or(Error::NotInitialized)
    }

    pub fn is_paused(e: &Env) -> Result<bool, Error> {
        if !storage::is_initialized(e) {
            return Err(Error::NotInitialized);
        }
        Ok(storage::is_paused(e))
    }

    /// Smallest bid the current lot accepts right now.
    ///
    /// # Errors
    /// * `Error::NotStarted` - If no auction has been opened yet
    /// * `Error::AuctionExpired` - If the current lot no longer takes bids
    pub fn min_next_bid(e: &Env) -> Result<i128, Error> {
        let params = Self::load_params(e)?;
        let auction = storage::get_auction(e).ok_or(Error::NotStarted)?;
        if Phase::of(Some(&auction), e.ledger().timestamp()) != Phase::Active {
            return Err(Error::AuctionExpired);
        }
        Ok(auction.min_next_bid(&params))
    }
}

impl AuctionHouse {
    fn load_settings(e: &Env) -> Result<Settings, Error> {
        storage::get_settings(e).ok_or(Error::NotInitialized)
    }

    fn load_params(e: &Env) -> Result<AuctionParams, Error> {
        storage::get_params(e).ok_or(Error::NotInitialized)
    }

    /// Finalize the current lot. The settled flag is stored before the item
    /// or any tokens leave the house.
    fn settle(e: &Env, settings: &Settings) -> Result<(), Error> {
        let mut auction = storage::get_auction(e).ok_or(Error::NotStarted)?;
        let settlement = auction.finalize(e.ledger().timestamp())?;
        storage::set_auction(e, &auction);

        let registry = ItemRegistryClient::new(e, &settings.registry);
        let (winner, amount) = match settlement {
            Settlement::Burn { item_id } => {
                registry.burn(&item_id);
                (None, 0)
            }
            Settlement::Sale {
                item_id,
                winner,
                amount,
            } => {
                registry.transfer(&e.current_contract_address(), &winner, &item_id);
                payments::forward_revenue(e, settings, amount);
                (Some(winner), amount)
            }
        };

        AuctionSettledEventData {
            item_id: auction.item_id,
            winner,
            amount,
        }
        .publish(e);

        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Open an auction for the next reserved item, or pause if there is none.
    ///
    /// The window is checked before minting so a halt never strands a lot.
    fn create_next(e: &Env, settings: &Settings) -> Result<(), Error> {
        let params = Self::load_params(e)?;
        let house = e.current_contract_address();
        let now = e.ledger().timestamp();

        let Some(end_time) = state::closing_time(now, params.duration) else {
            return Self::halt(e, HaltReason::WindowOverflow);
        };

        let reason = match registry::mint_next(e, &settings.registry, &house) {
            MintOutcome::Minted(item_id) => {
                let auction = Auction::open(item_id, now, end_time);
                storage::set_auction(e, &auction);

                AuctionCreatedEventData {
                    item_id,
                    start_time: auction.start_time,
                    end_time: auction.end_time,
                }
                .publish(e);
                return Ok(());
            }
            MintOutcome::Exhausted => HaltReason::PoolExhausted,
            MintOutcome::Failed => HaltReason::RegistryFailure,
        };
        Self::halt(e, reason)
    }

    fn halt(e: &Env, reason: HaltReason) -> Result<(), Error> {
        log!(e, "auction creation halted, pausing", reason);
        storage::set_paused(e, true);
        CreationHaltedEventData { reason }.publish(e);
        PausedEventData { paused: true }.publish(e);
        Ok(())
    }
}

fn check_duration(duration: u64) -> Result<(), Error> {
    if duration == 0 || duration > MAX_DURATION {
        return Err(Error::InvalidDuration);
    }
    Ok(())
}

fn check_time_buffer(time_buffer: u64) -> Result<(), Error> {
    if time_buffer > MAX_TIME_BUFFER {
        return Err(Error::InvalidTimeBuffer);
    }
    Ok(())
}
