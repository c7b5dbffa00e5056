use soroban_sdk::{contracttype, Address};

/// Minimum time, in seconds, an auction stays open for bids.
pub const MIN_AUCTION_DURATION: u64 = 3_600;

/// Fee rates are expressed in basis points of this base (100.00%).
pub const FEE_RATE_BASE: u32 = 10_000;

/// 2.5%
pub const DEFAULT_FEE_RATE: u32 = 250;

/// Hard ceiling on the fee rate: 10% of the base.
pub const MAX_FEE_RATE: u32 = 1_000;

/// Layout version of the data stored by this code.
pub const SCHEMA_VERSION: u32 = 1;

/// Currency an auction is denominated in.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Currency {
    /// The native asset configured at initialization.
    Native,
    /// The designated fungible bid token.
    Token(Address),
}

/// The custodied non-fungible asset.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AssetRef {
    pub collection: Address,
    pub token_id: u32,
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum AuctionStatus {
    Active,
    Ended,
    Cancelled,
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Auction {
    pub id: u32,
    pub seller: Address,
    pub asset: AssetRef,
    pub starting_price: i128,
    pub currency: Currency,
    pub start_time: u64,
    pub end_time: u64,
    pub highest_bid: i128, // starts at `starting_price`
    pub highest_bidder: Option<Address>,
    pub no_of_bids: u32,
    pub status: AuctionStatus,
}

/// Root configuration of the engine, set once by `initialize`.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Config {
    pub owner: Option<Address>, // `None` once ownership is renounced
    pub native_token: Address,
    pub bid_token: Address,
    pub fee_rate: u32,
    pub schema_version: u32,
}
