use soroban_sdk::{contractevent, Address};

/// Emitted when a deposit is booked in favour of a beneficiary
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreditedEventData {
    #[topic]
    pub beneficiary: Address,
    pub amount: i128,
    pub balance: i128,
}

/// Emitted when an owner pulls credited funds out of the sink
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEventData {
    #[topic]
    pub owner: Address,
    pub to: Address,
    pub amount: i128,
}
