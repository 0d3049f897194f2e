use soroban_sdk::{contractevent, Address};

use crate::types::HaltReason;

/// Event emitted when a new lot opens for bidding
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub item_id: u32,
    pub start_time: u64,
    pub end_time: u64,
}

/// Event emitted for every accepted bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionBidEventData {
    #[topic]
    pub item_id: u32,
    pub bidder: Address,
    pub amount: i128,
    pub extended: bool,
}

/// Event emitted when a late bid pushes the end of the window out
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionExtendedEventData {
    #[topic]
    pub item_id: u32,
    pub end_time: u64,
}

/// Event emitted when a lot is finalized; `winner` is `None` for a burned lot
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettledEventData {
    #[topic]
    pub item_id: u32,
    pub winner: Option<Address>,
    pub amount: i128,
}

/// Event emitted when a refund had to go through the payment sink
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundDeferredEventData {
    #[topic]
    pub recipient: Address,
    pub amount: i128,
}

/// Event emitted when the house could not open the next lot and paused itself
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreationHaltedEventData {
    pub reason: HaltReason,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PausedEventData {
    pub paused: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimeBufferUpdatedEventData {
    pub time_buffer: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReserveUpdatedEventData {
    pub reserve_price: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IncrementUpdatedEventData {
    pub min_bid_increment_percentage: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DurationUpdatedEventData {
    pub duration: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChangedEventData {
    #[topic]
    pub previous: Address,
    #[topic]
    pub admin: Address,
}
