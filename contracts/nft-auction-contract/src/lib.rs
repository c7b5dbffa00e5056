#![no_std]

use soroban_sdk::contract;

#[contract]
pub struct AuctionContract;

pub mod admin;
pub mod auction;
pub mod bid;
pub mod checks;
pub mod distribution;
pub mod errors;
pub mod event;
pub mod external;
pub mod fees;
pub mod guard;
pub mod storage;
pub mod traits;
pub mod types;

mod test;
