use soroban_sdk::{Address, Env};

use crate::{bid::BidFunds, errors::AuctionError, types::*};

/// Validates the parameters of a new auction against the engine config.
pub fn validate_auction_params(
    config: &Config,
    starting_price: i128,
    currency: &Currency,
    duration: u64,
) -> Result<(), AuctionError> {
    if starting_price <= 0 {
        return Err(AuctionError::InvalidStartingPrice);
    }

    if duration < MIN_AUCTION_DURATION {
        return Err(AuctionError::InvalidDuration);
    }

    // Only the designated bid token can denominate an auction
    if let Currency::Token(token) = currency {
        if *token != config.bid_token {
            return Err(AuctionError::UnsupportedBidToken);
        }
    }

    Ok(())
}

impl Auction {
    /// Terminal flag: set once by either resolution or cancellation.
    pub fn is_ended(&self) -> bool {
        self.status != AuctionStatus::Active
    }

    pub fn is_token_denominated(&self) -> bool {
        matches!(self.currency, Currency::Token(_))
    }

    pub fn check_not_ended(&self) -> Result<(), AuctionError> {
        if self.is_ended() {
            return Err(AuctionError::AuctionAlreadyEnded);
        }
        Ok(())
    }

    pub fn check_can_bid(&self, env: &Env, funds: &BidFunds) -> Result<(), AuctionError> {
        self.check_not_ended()?;

        // Bidding closes at `end_time`
        if env.ledger().timestamp() >= self.end_time {
            return Err(AuctionError::AuctionClosed);
        }

        if funds.currency != self.currency {
            return Err(AuctionError::UnsupportedBidToken);
        }

        if funds.amount <= self.highest_bid {
            return Err(AuctionError::BidTooLow);
        }

        Ok(())
    }

    pub fn check_can_end(&self, env: &Env) -> Result<(), AuctionError> {
        self.check_not_ended()?;

        if env.ledger().timestamp() <= self.end_time {
            return Err(AuctionError::AuctionNotEnded);
        }

        Ok(())
    }

    // Cancellation is gated by status and seller only, never by time.
    pub fn check_can_cancel(&self, caller: &Address) -> Result<(), AuctionError> {
        if *caller != self.seller {
            return Err(AuctionError::UnauthorizedSeller);
        }

        self.check_not_ended()
    }
}
