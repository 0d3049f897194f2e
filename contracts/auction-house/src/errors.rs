use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    /// No auction has been created yet
    NotStarted = 4,
    /// Bid names an item that is not up for auction
    NotCurrentItem = 5,
    AuctionExpired = 6,
    BelowReserve = 7,
    BelowMinIncrement = 8,
    InvalidAmount = 9,
    AlreadySettled = 10,
    NotYetExpired = 11,
    Paused = 12,
    NotPaused = 13,
    InvalidDuration = 14,
    InvalidReservePrice = 15,
    /// A guarded entry point was entered while another one was running
    Reentrant = 16,
    InvalidTimeBuffer = 17,
}
