use crate::{errors::AuctionError, types::*};
use soroban_sdk::{Address, Env};

/// Interface for the NFT auction contract.
pub trait AuctionTrait {
    /// Takes custody of `asset` and opens an auction for `duration` seconds.
    fn create_auction(
        env: Env,
        seller: Address,
        asset: AssetRef,
        starting_price: i128,
        currency: Currency,
        duration: u64,
    ) -> Result<u32, AuctionError>;

    /// Places a bid through exactly one of the token or native channels.
    fn place_bid(
        env: Env,
        bidder: Address,
        auction_id: u32,
        token_amount: i128,
        bid_token: Option<Address>,
        native_amount: i128,
    ) -> Result<(), AuctionError>;

    fn end_auction(env: Env, auction_id: u32) -> Result<(), AuctionError>;

    fn cancel_auction(env: Env, caller: Address, auction_id: u32) -> Result<(), AuctionError>;

    fn get_auction(env: Env, auction_id: u32) -> Result<Auction, AuctionError>;

    fn next_auction_id(env: Env) -> u32;
}
