use soroban_sdk::{contracttype, Address};

const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// The single lot currently (or most recently) up for auction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub item_id: u32,
    pub amount: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub bidder: Option<Address>,
    pub settled: bool,
}

/// Bidding rules, changeable by the admin between bids.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionParams {
    /// Minimum time left on the clock after a bid
    pub time_buffer: u64,
    /// Minimum first bid
    pub reserve_price: i128,
    /// Minimum step over the previous bid, in whole percent
    pub min_bid_increment_percentage: u32,
    /// Length of a fresh auction window
    pub duration: u64,
}

/// Collaborators fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    /// Token bids are paid in
    pub token: Address,
    /// Item registry that mints, burns and transfers lots
    pub registry: Address,
    /// Payment sink holding refunds that could not be delivered
    pub sink: Address,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Uninitialized = 0,
    Active = 1,
    ExpiredUnsettled = 2,
    Settled = 3,
}

/// Why the house paused itself instead of opening the next auction.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HaltReason {
    PoolExhausted = 0,
    RegistryFailure = 1,
    /// The next window would end past the largest ledger timestamp
    WindowOverflow = 2,
}

#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Admin,
    Initialized,
    Paused,
    /// Re-entrancy lock held while a guarded entry point runs
    Locked,
    Settings,
    Params,
    Auction,
}
