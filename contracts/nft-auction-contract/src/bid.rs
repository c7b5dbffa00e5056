use soroban_sdk::{Address, Env};

use crate::{distribution, errors::AuctionError, storage, types::*};

/// Funds supplied with a bid, in exactly one currency.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidFunds {
    pub currency: Currency,
    pub amount: i128,
}

impl BidFunds {
    /// Collapses the two payment channels of a bid call into a single
    /// currency and amount.
    pub fn from_channels(
        token_amount: i128,
        bid_token: Option<Address>,
        native_amount: i128,
    ) -> Result<Self, AuctionError> {
        if token_amount < 0 || native_amount < 0 {
            return Err(AuctionError::NegativeAmount);
        }

        match (native_amount > 0, token_amount > 0) {
            (true, true) => Err(AuctionError::InvalidBidAmountCombination),
            (false, false) => Err(AuctionError::ZeroBidAmount),
            (true, false) => Ok(BidFunds {
                currency: Currency::Native,
                amount: native_amount,
            }),
            (false, true) => match bid_token {
                Some(token) => Ok(BidFunds {
                    currency: Currency::Token(token),
                    amount: token_amount,
                }),
                None => Err(AuctionError::UnsupportedBidToken),
            },
        }
    }
}

/// Accepts `funds` as the new leading bid on `auction_data`.
///
/// The updated record is saved before any transfer; the new funds are then
/// pulled into escrow and the previous leader, if any, is refunded in full.
pub fn record_bid(
    env: &Env,
    config: &Config,
    auction_data: &mut Auction,
    new_bidder: &Address,
    funds: &BidFunds,
) -> Result<(), AuctionError> {
    auction_data.check_can_bid(env, funds)?;

    let prev_bidder = auction_data.highest_bidder.clone();
    let prev_bid_amount = auction_data.highest_bid;

    auction_data.highest_bidder = Some(new_bidder.clone());
    auction_data.highest_bid = funds.amount;
    auction_data.no_of_bids += 1;
    storage::save_auction(env, auction_data);

    distribution::pull_funds(env, config, &funds.currency, new_bidder, &funds.amount);

    if let Some(prev_bidder) = prev_bidder {
        distribution::push_funds(
            env,
            config,
            &auction_data.currency,
            &prev_bidder,
            &prev_bid_amount,
        );
    }

    Ok(())
}
