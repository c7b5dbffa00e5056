#![cfg(test)]


use crate::auction::{AuctionContract, AuctionContractClient};
use crate::event::AUCTION;
use crate::storage::DataKey;
use crate::types::{AssetRef, Currency, MIN_AUCTION_DURATION};
use mock_nft::{MockNft, MockNftClient};
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{token, Address, Env, FromVal, IntoVal, Symbol, Val, Vec};

// 1 unit of either currency, in its smallest denomination (7 decimals).
pub const ONE: i128 = 10_000_000;
pub const STARTING_PRICE: i128 = ONE / 100; // 0.01
pub const DURATION: u64 = 2 * MIN_AUCTION_DURATION;
pub const NFT_ID: u32 = 1;

pub struct AuctionTest {
    pub env: Env,
    pub contract_id: Address,
    pub client: AuctionContractClient<'static>,
    pub owner: Address,
    pub seller: Address,
    pub nft: MockNftClient<'static>,
    pub native: TokenClient<'static>,
    pub native_admin: StellarAssetClient<'static>,
    pub usdc: TokenClient<'static>,
    pub usdc_admin: StellarAssetClient<'static>,
}

fn create_token_contract<'a>(
    e: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let sac = e.register_stellar_asset_contract_v2(admin.clone());
    (
        token::Client::new(e, &sac.address()),
        token::StellarAssetClient::new(e, &sac.address()),
    )
}

impl AuctionTest {
    /// Initialized engine with a seller holding NFT `NFT_ID`.
    pub fn setup() -> Self {
        let env = Env::default();
        env.cost_estimate().budget().reset_unlimited();
        env.mock_all_auths();

        let contract_id = env.register(AuctionContract, ());
        let client = AuctionContractClient::new(&env, &contract_id);

        let owner = Address::generate(&env);
        let seller = Address::generate(&env);
        let token_admin = Address::generate(&env);

        let (native, native_admin) = create_token_contract(&env, &token_admin);
        let (usdc, usdc_admin) = create_token_contract(&env, &token_admin);

        let nft_id = env.register(MockNft, ());
        let nft = MockNftClient::new(&env, &nft_id);
        nft.mint(&seller, &NFT_ID);

        client.initialize(&owner, &native.address, &usdc.address);

        AuctionTest {
            env,
            contract_id,
            client,
            owner,
            seller,
            nft,
            native,
            native_admin,
            usdc,
            usdc_admin,
        }
    }

    pub fn asset(&self, token_id: u32) -> AssetRef {
        AssetRef {
            collection: self.nft.address.clone(),
            token_id,
        }
    }

    pub fn usdc_currency(&self) -> Currency {
        Currency::Token(self.usdc.address.clone())
    }

    /// Approves the engine for `token_id` and opens an auction on it.
    pub fn create_auction(&self, token_id: u32, starting_price: i128, currency: &Currency) -> u32 {
        self.nft.approve(&self.seller, &self.contract_id, &token_id);
        self.client.create_auction(
            &self.seller,
            &self.asset(token_id),
            &starting_price,
            currency,
            &DURATION,
        )
    }

    /// Mints a fresh NFT to the seller and auctions it.
    pub fn create_auction_for_new_nft(
        &self,
        token_id: u32,
        starting_price: i128,
        currency: &Currency,
    ) -> u32 {
        self.nft.mint(&self.seller, &token_id);
        self.create_auction(token_id, starting_price, currency)
    }

    pub fn funded_bidder(&self, native_amount: i128, usdc_amount: i128) -> Address {
        let bidder = Address::generate(&self.env);
        if native_amount > 0 {
            self.native_admin.mint(&bidder, &native_amount);
        }
        if usdc_amount > 0 {
            self.usdc_admin.mint(&bidder, &usdc_amount);
        }
        bidder
    }

    pub fn bid_native(&self, bidder: &Address, auction_id: u32, amount: i128) {
        self.client
            .place_bid(bidder, &auction_id, &0, &None, &amount);
    }

    pub fn bid_usdc(&self, bidder: &Address, auction_id: u32, amount: i128) {
        let expiration_ledger = self.env.ledger().sequence() + 1_000;
        self.usdc
            .approve(bidder, &self.contract_id, &amount, &expiration_ledger);
        self.client.place_bid(
            bidder,
            &auction_id,
            &amount,
            &Some(self.usdc.address.clone()),
            &0,
        );
    }

    pub fn jump_past_end(&self, auction_id: u32) {
        let auction = self.client.get_auction(&auction_id);
        self.env.ledger().set_timestamp(auction.end_time + 1);
    }

    /// Leaves the reentrancy flag raised, as if a guarded call were in progress.
    pub fn raise_reentry_flag(&self) {
        self.env.as_contract(&self.contract_id, || {
            self.env.storage().instance().set(&DataKey::Entered, &true);
        });
    }

    /// Data of the most recent engine event with topic `(AUCTION, kind)`.
    pub fn last_event<T: FromVal<Env, Val>>(&self, kind: Symbol) -> Option<T> {
        let topics: Vec<Val> = (AUCTION, kind).into_val(&self.env);
        self.env
            .events()
            .all()
            .iter()
            .rev()
            .find(|(address, event_topics, _)| {
                *address == self.contract_id && *event_topics == topics
            })
            .map(|(_, _, data)| T::from_val(&self.env, &data))
    }
}
