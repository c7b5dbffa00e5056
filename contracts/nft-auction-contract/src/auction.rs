use crate::bid::{record_bid, BidFunds};
use crate::checks::validate_auction_params;
use crate::event::{
    AuctionCancelled, AuctionCreated, AuctionEnded, BidPlaced, FeeCollected, AUCTION, BID, CANCEL,
    CREATE, END, FEE,
};
use crate::fees::{compute_fee, credit_fee};
use crate::traits::AuctionTrait;
use crate::{distribution, errors::AuctionError, guard, storage, types::*};
pub use crate::{AuctionContract, AuctionContractArgs, AuctionContractClient};
use soroban_sdk::{contractimpl, log, Address, Env};

#[contractimpl]
impl AuctionTrait for AuctionContract {
    /// Creates a new auction and takes custody of the asset.
    fn create_auction(
        env: Env,
        seller: Address,
        asset: AssetRef,
        starting_price: i128,
        currency: Currency,
        duration: u64,
    ) -> Result<u32, AuctionError> {
        seller.require_auth(); // Ensure caller is authenticated as the auction creator

        guard::non_reentrant(&env, || {
            let config = storage::get_config(&env)?;

            validate_auction_params(&config, starting_price, &currency, duration)?;

            let start_time = env.ledger().timestamp();
            let end_time = start_time
                .checked_add(duration)
                .ok_or(AuctionError::ArithmeticOverflow)?;

            let auction_id = storage::get_next_auction_id(&env);
            let next_id = auction_id
                .checked_add(1)
                .ok_or(AuctionError::ArithmeticOverflow)?;

            let auction = Auction {
                id: auction_id,
                seller: seller.clone(),
                asset: asset.clone(),
                starting_price,
                currency: currency.clone(),
                start_time,
                end_time,
                highest_bid: starting_price,
                highest_bidder: None,
                no_of_bids: 0,
                status: AuctionStatus::Active,
            };

            storage::save_auction(&env, &auction);
            storage::save_next_auction_id(&env, next_id);
            if auction.is_token_denominated() {
                storage::save_open_token_auctions(&env, storage::get_open_token_auctions(&env) + 1);
            }

            // Fails the whole call if the seller does not control the asset
            distribution::pull_asset(&env, &asset, &seller);

            log!(&env, "auction created", auction_id, seller);
            env.events().publish(
                (AUCTION, CREATE),
                AuctionCreated {
                    auction_id,
                    seller: seller.clone(),
                    asset: asset.clone(),
                    starting_price,
                    currency: currency.clone(),
                    end_time,
                },
            );

            Ok(auction_id)
        })
    }

    /// Places a bid on an active auction.
    fn place_bid(
        env: Env,
        bidder: Address,
        auction_id: u32,
        token_amount: i128,
        bid_token: Option<Address>,
        native_amount: i128,
    ) -> Result<(), AuctionError> {
        bidder.require_auth(); // Ensure bidder is authenticated

        guard::non_reentrant(&env, || {
            let config = storage::get_config(&env)?;
            let mut auction_data = storage::get_auction(&env, auction_id)?;

            // Reject bids on cancelled or resolved auctions before looking at funds
            auction_data.check_not_ended()?;

            let funds = BidFunds::from_channels(token_amount, bid_token.clone(), native_amount)?;

            record_bid(&env, &config, &mut auction_data, &bidder, &funds)?;

            log!(&env, "bid placed", auction_id, bidder, funds.amount);
            env.events().publish(
                (AUCTION, BID),
                BidPlaced {
                    auction_id,
                    bidder: bidder.clone(),
                    amount: funds.amount,
                    currency: funds.currency,
                },
            );

            Ok(())
        })
    }

    /// Resolves an auction once its end time has passed.
    fn end_auction(env: Env, auction_id: u32) -> Result<(), AuctionError> {
        guard::non_reentrant(&env, || {
            let config = storage::get_config(&env)?;
            let mut auction_data = storage::get_auction(&env, auction_id)?;

            auction_data.check_can_end(&env)?;

            auction_data.status = AuctionStatus::Ended;
            storage::save_auction(&env, &auction_data);
            close_token_auction(&env, &auction_data);

            let seller = auction_data.seller.clone();
            let currency = auction_data.currency.clone();

            match auction_data.highest_bidder.clone() {
                None => {
                    // No bid: the asset goes back to the seller
                    distribution::push_asset(&env, &auction_data.asset, &seller);

                    log!(&env, "auction ended without bids", auction_id);
                    env.events().publish(
                        (AUCTION, END),
                        AuctionEnded {
                            auction_id,
                            winner: None,
                            amount: 0,
                            currency,
                            seller,
                        },
                    );
                }
                Some(winner) => {
                    let amount = auction_data.highest_bid;
                    let fee = compute_fee(amount, config.fee_rate)?;
                    let proceeds = amount - fee;

                    credit_fee(&env, &currency, fee)?;

                    distribution::push_funds(&env, &config, &currency, &seller, &proceeds);
                    distribution::push_asset(&env, &auction_data.asset, &winner);

                    log!(&env, "auction ended", auction_id, winner, amount, fee);
                    env.events().publish(
                        (AUCTION, END),
                        AuctionEnded {
                            auction_id,
                            winner: Some(winner),
                            amount,
                            currency: currency.clone(),
                            seller: seller.clone(),
                        },
                    );

                    if fee > 0 {
                        env.events().publish(
                            (AUCTION, FEE),
                            FeeCollected {
                                auction_id,
                                fee,
                                currency,
                                seller,
                            },
                        );
                    }
                }
            }

            Ok(())
        })
    }

    /// Cancels an auction. Only the seller may cancel, at any time before the
    /// auction is resolved.
    fn cancel_auction(env: Env, caller: Address, auction_id: u32) -> Result<(), AuctionError> {
        caller.require_auth();

        guard::non_reentrant(&env, || {
            let config = storage::get_config(&env)?;
            let mut auction_data = storage::get_auction(&env, auction_id)?;

            auction_data.check_can_cancel(&caller)?;

            auction_data.status = AuctionStatus::Cancelled;
            storage::save_auction(&env, &auction_data);
            close_token_auction(&env, &auction_data);

            distribution::push_asset(&env, &auction_data.asset, &auction_data.seller);

            // Full refund, no fee on cancellation
            if let Some(bidder) = &auction_data.highest_bidder {
                distribution::push_funds(
                    &env,
                    &config,
                    &auction_data.currency,
                    bidder,
                    &auction_data.highest_bid,
                );
            }

            log!(&env, "auction cancelled", auction_id);
            env.events().publish(
                (AUCTION, CANCEL),
                AuctionCancelled {
                    auction_id,
                    seller: auction_data.seller.clone(),
                },
            );

            Ok(())
        })
    }

    fn get_auction(env: Env, auction_id: u32) -> Result<Auction, AuctionError> {
        storage::get_auction(&env, auction_id)
    }

    fn next_auction_id(env: Env) -> u32 {
        storage::get_next_auction_id(&env)
    }
}

// Token auctions are tracked until resolved so the bid token cannot change
// under escrowed funds.
fn close_token_auction(env: &Env, auction: &Auction) {
    if auction.is_token_denominated() {
        let open = storage::get_open_token_auctions(env);
        storage::save_open_token_auctions(env, open.saturating_sub(1));
    }
}
