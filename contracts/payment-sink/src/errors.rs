use soroban_sdk::contracterror;

/// Error codes for the payment sink.
/// Uses error codes starting at 200 so they never collide with the auction house.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Amount must be strictly positive
    InvalidAmount = 200,
    /// The sink does not hold enough unbooked tokens to back the credit
    UnbackedCredit = 201,
    /// Owner is asking for more than has been credited to them
    InsufficientCredit = 202,
    NotInitialized = 203,
    AlreadyInitialized = 204,
}
