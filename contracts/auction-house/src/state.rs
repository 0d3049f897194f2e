//! Auction state machine.
//!
//! Every transition takes the current ledger time as an argument instead of
//! reading it from the environment, so the rules below can be exercised with
//! any clock. Persistence and token movements live in the contract layer.

use soroban_sdk::Address;

use crate::errors::Error;
use crate::types::{Auction, AuctionParams, Phase};

/// What happened to the record when a bid was accepted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidReceipt {
    /// Bidder (and amount) that was just outbid and is owed a refund
    pub displaced: Option<(Address, i128)>,
    pub extended: bool,
}

/// How a finalized lot leaves the house.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Settlement {
    /// Nobody bid; the item is destroyed.
    Burn { item_id: u32 },
    /// The item goes to the winner and `amount` becomes revenue.
    Sale {
        item_id: u32,
        winner: Address,
        amount: i128,
    },
}

impl Phase {
    pub fn of(auction: Option<&Auction>, now: u64) -> Phase {
        match auction {
            None => Phase::Uninitialized,
            Some(a) if a.settled => Phase::Settled,
            Some(a) if now < a.end_time => Phase::Active,
            Some(_) => Phase::ExpiredUnsettled,
        }
    }
}

/// End of a window of `duration` seconds opened at `start_time`, or `None`
/// when it does not fit the ledger clock.
pub fn closing_time(start_time: u64, duration: u64) -> Option<u64> {
    start_time.checked_add(duration)
}

impl Auction {
    pub fn open(item_id: u32, start_time: u64, end_time: u64) -> Auction {
        Auction {
            item_id,
            amount: 0,
            start_time,
            end_time,
            bidder: None,
            settled: false,
        }
    }

    /// Smallest amount the next bid has to reach.
    pub fn min_next_bid(&self, params: &AuctionParams) -> i128 {
        params.reserve_price.max(self.increment_floor(params)).max(1)
    }

    /// Current amount raised by the minimum increment. Saturates instead of
    /// overflowing, which simply makes the next bid unreachable.
    fn increment_floor(&self, params: &AuctionParams) -> i128 {
        let increment = self
            .amount
            .saturating_mul(params.min_bid_increment_percentage as i128)
            / 100;
        self.amount.saturating_add(increment)
    }

    pub fn validate_bid(
        &self,
        params: &AuctionParams,
        item_id: u32,
        amount: i128,
        now: u64,
    ) -> Result<(), Error> {
        if item_id != self.item_id {
            return Err(Error::NotCurrentItem);
        }
        if now >= self.end_time || self.settled {
            return Err(Error::AuctionExpired);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if amount < params.reserve_price {
            return Err(Error::BelowReserve);
        }
        if amount < self.increment_floor(params) {
            return Err(Error::BelowMinIncrement);
        }
        Ok(())
    }

    /// Replace the leading bid. Must only follow a successful [`Auction::validate_bid`].
    pub fn record_bid(
        &mut self,
        bidder: Address,
        amount: i128,
        now: u64,
        time_buffer: u64,
    ) -> BidReceipt {
        let displaced = self.bidder.take().map(|previous| (previous, self.amount));

        self.amount = amount;
        self.bidder = Some(bidder);

        let extended = self.end_time.saturating_sub(now) < time_buffer;
        if extended {
            self.end_time = now.saturating_add(time_buffer);
        }

        BidReceipt {
            displaced,
            extended,
        }
    }

    /// Mark the lot settled and report what must happen to it.
    ///
    /// The record is flagged before anything leaves the house, so a second
    /// call always fails with `AlreadySettled`.
    pub fn finalize(&mut self, now: u64) -> Result<Settlement, Error> {
        if self.settled {
            return Err(Error::AlreadySettled);
        }
        if now < self.end_time {
            return Err(Error::NotYetExpired);
        }

        self.settled = true;

        Ok(match &self.bidder {
            None => Settlement::Burn {
                item_id: self.item_id,
            },
            Some(winner) => Settlement::Sale {
                item_id: self.item_id,
                winner: winner.clone(),
                amount: self.amount,
            },
        })
    }
}
