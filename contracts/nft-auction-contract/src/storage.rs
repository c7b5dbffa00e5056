use soroban_sdk::{contracttype, Env};

use crate::errors::AuctionError;
use crate::types::{Auction, Config};

/// Keys used to store contract data in Soroban storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,            // Engine configuration, owner included
    NextAuctionId,     // Id handed to the next created auction
    Auction(u32),      // Auction record by id
    NativeFees,        // Accrued fees in the native asset
    TokenFees,         // Accrued fees in the bid token
    OpenTokenAuctions, // Active auctions denominated in the bid token
    Entered,           // Set while a guarded entry point is running
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<Config, AuctionError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(AuctionError::NotInitialized)
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_next_auction_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::NextAuctionId)
        .unwrap_or(0)
}

pub fn save_next_auction_id(env: &Env, next_id: u32) {
    env.storage()
        .instance()
        .set(&DataKey::NextAuctionId, &next_id);
}

pub fn get_auction(env: &Env, auction_id: u32) -> Result<Auction, AuctionError> {
    env.storage()
        .persistent()
        .get(&DataKey::Auction(auction_id))
        .ok_or(AuctionError::AuctionNotFound)
}

pub fn save_auction(env: &Env, auction: &Auction) {
    env.storage()
        .persistent()
        .set(&DataKey::Auction(auction.id), auction);
}

pub fn get_native_fees(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::NativeFees)
        .unwrap_or(0)
}

pub fn save_native_fees(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::NativeFees, &amount);
}

pub fn get_token_fees(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TokenFees)
        .unwrap_or(0)
}

pub fn save_token_fees(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TokenFees, &amount);
}

pub fn get_open_token_auctions(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::OpenTokenAuctions)
        .unwrap_or(0)
}

pub fn save_open_token_auctions(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set(&DataKey::OpenTokenAuctions, &count);
}
