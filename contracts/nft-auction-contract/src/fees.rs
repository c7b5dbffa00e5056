use soroban_sdk::{contractimpl, log, Address, Env};

use crate::admin::require_owner;
use crate::auction::{AuctionContract, AuctionContractArgs, AuctionContractClient};
use crate::event::{FeeRateUpdated, FeesWithdrawn, AUCTION, FEE_RATE, WITHDRAW};
use crate::{distribution, errors::AuctionError, guard, storage, types::*};

/// `floor(amount * fee_rate / FEE_RATE_BASE)`.
pub fn compute_fee(amount: i128, fee_rate: u32) -> Result<i128, AuctionError> {
    if amount < 0 {
        return Err(AuctionError::NegativeAmount);
    }

    amount
        .checked_mul(fee_rate as i128)
        .map(|scaled| scaled / FEE_RATE_BASE as i128)
        .ok_or(AuctionError::ArithmeticOverflow)
}

/// Adds `fee` to the accrued total of `currency`.
pub fn credit_fee(env: &Env, currency: &Currency, fee: i128) -> Result<(), AuctionError> {
    match currency {
        Currency::Native => {
            let total = storage::get_native_fees(env)
                .checked_add(fee)
                .ok_or(AuctionError::ArithmeticOverflow)?;
            storage::save_native_fees(env, total);
        }
        Currency::Token(_) => {
            let total = storage::get_token_fees(env)
                .checked_add(fee)
                .ok_or(AuctionError::ArithmeticOverflow)?;
            storage::save_token_fees(env, total);
        }
    }
    Ok(())
}

#[contractimpl]
impl AuctionContract {
    pub fn fee_rate(env: Env) -> Result<u32, AuctionError> {
        Ok(storage::get_config(&env)?.fee_rate)
    }

    pub fn calculate_fee(env: Env, amount: i128) -> Result<i128, AuctionError> {
        let config = storage::get_config(&env)?;
        compute_fee(amount, config.fee_rate)
    }

    /// Accrued, unwithdrawn fees in `currency`.
    pub fn total_fees(env: Env, currency: Currency) -> Result<i128, AuctionError> {
        let config = storage::get_config(&env)?;
        Ok(match currency {
            Currency::Native => storage::get_native_fees(&env),
            Currency::Token(token) if token == config.bid_token => storage::get_token_fees(&env),
            Currency::Token(_) => 0,
        })
    }

    pub fn set_fee_rate(env: Env, caller: Address, new_rate: u32) -> Result<(), AuctionError> {
        let mut config = require_owner(&env, &caller)?;

        if new_rate > MAX_FEE_RATE {
            return Err(AuctionError::InvalidFeeRate);
        }

        let old_rate = config.fee_rate;
        config.fee_rate = new_rate;
        storage::save_config(&env, &config);

        log!(&env, "fee rate updated", old_rate, new_rate);
        env.events()
            .publish((AUCTION, FEE_RATE), FeeRateUpdated { old_rate, new_rate });

        Ok(())
    }

    /// Sends every accrued fee balance to the owner and zeroes the totals.
    pub fn withdraw_fees(env: Env, caller: Address) -> Result<(), AuctionError> {
        let config = require_owner(&env, &caller)?;

        guard::non_reentrant(&env, || {
            let native_amount = storage::get_native_fees(&env);
            let token_amount = storage::get_token_fees(&env);

            if native_amount == 0 && token_amount == 0 {
                return Err(AuctionError::NoFeesToWithdraw);
            }

            storage::save_native_fees(&env, 0);
            storage::save_token_fees(&env, 0);

            distribution::push_funds(&env, &config, &Currency::Native, &caller, &native_amount);
            distribution::push_funds(
                &env,
                &config,
                &Currency::Token(config.bid_token.clone()),
                &caller,
                &token_amount,
            );

            log!(&env, "fees withdrawn", native_amount, token_amount);
            env.events().publish(
                (AUCTION, WITHDRAW),
                FeesWithdrawn {
                    owner: caller.clone(),
                    native_amount,
                    token_amount,
                },
            );

            Ok(())
        })
    }
}
