pub mod mock_registry;

use crate::{AuctionHouse, AuctionHouseClient};
use mock_registry::{MockRegistry, MockRegistryClient};
use mock_token::{MockToken, MockTokenClient};
use payment_sink::{PaymentSink, PaymentSinkClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _, Ledger, LedgerInfo},
    token, Address, Env, Event, Vec,
};

pub const START_TIME: u64 = 1_000;
pub const TIME_BUFFER: u64 = 300;
pub const RESERVE_PRICE: i128 = 100;
pub const MIN_INCREMENT_PCT: u32 = 5;
pub const DURATION: u64 = 86_400;
pub const STARTING_BALANCE: i128 = 10_000;

pub enum TokenKind {
    Stellar,
    /// Token that lets holders refuse incoming transfers.
    Rejecting,
}

pub struct Setup {
    pub env: Env,
    pub house: AuctionHouseClient<'static>,
    pub admin: Address,
    pub registry: MockRegistryClient<'static>,
    pub sink: PaymentSinkClient<'static>,
    pub token: token::TokenClient<'static>,
    pub mock_token: Option<MockTokenClient<'static>>,
}

impl Setup {
    /// A fresh address holding `STARTING_BALANCE` of the payment token.
    pub fn funded_bidder(&self) -> Address {
        let bidder = Address::generate(&self.env);
        match &self.mock_token {
            Some(mock) => mock.mint(&bidder, &STARTING_BALANCE),
            None => token::StellarAssetClient::new(&self.env, &self.token.address)
                .mint(&bidder, &STARTING_BALANCE),
        }
        bidder
    }

    pub fn current_item(&self) -> u32 {
        self.house.get_auction().unwrap().item_id
    }

    /// Move the ledger clock to the end of the current auction.
    pub fn expire_current(&self) {
        let end_time = self.house.get_auction().unwrap().end_time;
        self.env.ledger().with_mut(|li| li.timestamp = end_time);
    }
}

/// Initialized but still paused house over a registry holding `pool`.
pub fn setup_with(pool: &[u32], kind: TokenKind) -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    env.ledger().set(LedgerInfo {
        timestamp: START_TIME,
        protocol_version: 23,
        sequence_number: 1,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 3_110_400,
    });

    let (token_address, mock_token) = match kind {
        TokenKind::Stellar => {
            let token_admin = Address::generate(&env);
            let token_contract = env.register_stellar_asset_contract_v2(token_admin);
            (token_contract.address(), None)
        }
        TokenKind::Rejecting => {
            let token_id = env.register(MockToken, ());
            (token_id.clone(), Some(MockTokenClient::new(&env, &token_id)))
        }
    };

    let registry_id = env.register(MockRegistry, (Vec::from_slice(&env, pool),));
    let sink_id = env.register(PaymentSink, ());
    PaymentSinkClient::new(&env, &sink_id).initialize(&token_address);
    let house_id = env.register(AuctionHouse, ());

    let house = AuctionHouseClient::new(&env, &house_id);
    let admin = Address::generate(&env);
    house.initialize(
        &admin,
        &token_address,
        &registry_id,
        &sink_id,
        &TIME_BUFFER,
        &RESERVE_PRICE,
        &MIN_INCREMENT_PCT,
        &DURATION,
    );

    Setup {
        house,
        admin,
        registry: MockRegistryClient::new(&env, &registry_id),
        sink: PaymentSinkClient::new(&env, &sink_id),
        token: token::TokenClient::new(&env, &token_address),
        mock_token,
        env,
    }
}

/// Running house with the first of three reserved items up for auction.
pub fn setup_test() -> Setup {
    let setup = setup_with(&[1, 2, 3], TokenKind::Stellar);
    setup.house.unpause(&setup.admin);
    setup
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}

/// Position of `event`, as published by `contract`, among the events of the
/// most recent contract call. Read it before making any other call.
pub fn event_position(env: &Env, contract: &Address, event: &impl Event) -> Option<u32> {
    env.events()
        .all()
        .first_index_of((contract.clone(), event.topics(env), event.data(env)))
}

pub fn emitted(env: &Env, contract: &Address, event: &impl Event) -> bool {
    event_position(env, contract, event).is_some()
}
