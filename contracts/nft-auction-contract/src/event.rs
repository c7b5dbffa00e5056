use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

use crate::types::{AssetRef, Currency};

// Topic shared by every engine event.
pub const AUCTION: Symbol = symbol_short!("AUCTION");

pub const CREATE: Symbol = symbol_short!("CREATE");
pub const BID: Symbol = symbol_short!("BID");
pub const END: Symbol = symbol_short!("END");
pub const CANCEL: Symbol = symbol_short!("CANCEL");
pub const FEE: Symbol = symbol_short!("FEE");
pub const FEE_RATE: Symbol = symbol_short!("FEE_RATE");
pub const WITHDRAW: Symbol = symbol_short!("WITHDRAW");
pub const OWNER: Symbol = symbol_short!("OWNER");
pub const BID_TOKEN: Symbol = symbol_short!("BID_TOKEN");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    pub auction_id: u32,
    pub seller: Address,
    pub asset: AssetRef,
    pub starting_price: i128,
    pub currency: Currency,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    pub auction_id: u32,
    pub bidder: Address,
    pub amount: i128,
    pub currency: Currency,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEnded {
    pub auction_id: u32,
    pub winner: Option<Address>,
    pub amount: i128,
    pub currency: Currency,
    pub seller: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelled {
    pub auction_id: u32,
    pub seller: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeCollected {
    pub auction_id: u32,
    pub fee: i128,
    pub currency: Currency,
    pub seller: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeRateUpdated {
    pub old_rate: u32,
    pub new_rate: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesWithdrawn {
    pub owner: Address,
    pub native_amount: i128,
    pub token_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Option<Address>,
    pub new_owner: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidTokenUpdated {
    pub old_token: Address,
    pub new_token: Address,
}
