use soroban_sdk::{contractimpl, log, Address, BytesN, Env};

use crate::auction::{AuctionContract, AuctionContractArgs, AuctionContractClient};
use crate::event::{BidTokenUpdated, OwnershipTransferred, AUCTION, BID_TOKEN, OWNER};
use crate::{errors::AuctionError, storage, types::*};

/// Checks that `caller` is the current owner and returns the config.
///
/// Ownership is read from storage on every call.
pub fn require_owner(env: &Env, caller: &Address) -> Result<Config, AuctionError> {
    caller.require_auth();

    let config = storage::get_config(env)?;
    match &config.owner {
        Some(owner) if owner == caller => Ok(config),
        Some(_) => Err(AuctionError::Unauthorized),
        None => Err(AuctionError::OwnershipRenounced),
    }
}

fn set_owner(env: &Env, mut config: Config, new_owner: Option<Address>) {
    let previous_owner = config.owner.clone();
    config.owner = new_owner.clone();
    storage::save_config(env, &config);

    env.events().publish(
        (AUCTION, OWNER),
        OwnershipTransferred {
            previous_owner,
            new_owner,
        },
    );
}

#[contractimpl]
impl AuctionContract {
    /// Initialize the engine with its owner and the two bid currencies.
    pub fn initialize(
        env: Env,
        owner: Address,
        native_token: Address,
        bid_token: Address,
    ) -> Result<(), AuctionError> {
        if storage::has_config(&env) {
            return Err(AuctionError::AlreadyInitialized);
        }

        owner.require_auth();

        if native_token == bid_token {
            return Err(AuctionError::DuplicateCurrencyToken);
        }

        let config = Config {
            owner: Some(owner.clone()),
            native_token,
            bid_token,
            fee_rate: DEFAULT_FEE_RATE,
            schema_version: SCHEMA_VERSION,
        };
        storage::save_config(&env, &config);
        storage::save_next_auction_id(&env, 0);
        storage::save_native_fees(&env, 0);
        storage::save_token_fees(&env, 0);
        storage::save_open_token_auctions(&env, 0);

        log!(&env, "auction engine initialized", owner);
        env.events().publish(
            (AUCTION, OWNER),
            OwnershipTransferred {
                previous_owner: None,
                new_owner: Some(owner),
            },
        );

        Ok(())
    }

    pub fn owner(env: Env) -> Result<Option<Address>, AuctionError> {
        Ok(storage::get_config(&env)?.owner)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), AuctionError> {
        let config = require_owner(&env, &caller)?;

        log!(&env, "ownership transferred", caller, new_owner);
        set_owner(&env, config, Some(new_owner));
        Ok(())
    }

    /// Leaves the engine without an owner. Owner-only calls fail afterwards.
    pub fn renounce_ownership(env: Env, caller: Address) -> Result<(), AuctionError> {
        let config = require_owner(&env, &caller)?;

        log!(&env, "ownership renounced", caller);
        set_owner(&env, config, None);
        Ok(())
    }

    pub fn native_token(env: Env) -> Result<Address, AuctionError> {
        Ok(storage::get_config(&env)?.native_token)
    }

    pub fn bid_token(env: Env) -> Result<Address, AuctionError> {
        Ok(storage::get_config(&env)?.bid_token)
    }

    /// Replace the designated fungible bid token.
    ///
    /// Rejected while token auctions are open or token fees are unwithdrawn,
    /// so every token balance held by the engine is in the designated token.
    pub fn set_bid_token(env: Env, caller: Address, token: Address) -> Result<(), AuctionError> {
        let mut config = require_owner(&env, &caller)?;

        if token == config.native_token {
            return Err(AuctionError::DuplicateCurrencyToken);
        }
        if storage::get_open_token_auctions(&env) > 0 || storage::get_token_fees(&env) > 0 {
            return Err(AuctionError::BidTokenInUse);
        }

        let old_token = config.bid_token.clone();
        config.bid_token = token.clone();
        storage::save_config(&env, &config);

        log!(&env, "bid token updated", old_token, token);
        env.events().publish(
            (AUCTION, BID_TOKEN),
            BidTokenUpdated {
                old_token,
                new_token: token,
            },
        );

        Ok(())
    }

    /// Schema version of the stored data.
    pub fn version(env: Env) -> Result<u32, AuctionError> {
        Ok(storage::get_config(&env)?.schema_version)
    }

    /// Bring stored data up to the schema of the running code. Call once after
    /// `upgrade`; a no-op when the stored schema is already current.
    pub fn migrate(env: Env, caller: Address) -> Result<u32, AuctionError> {
        let mut config = require_owner(&env, &caller)?;

        if config.schema_version < SCHEMA_VERSION {
            let from = config.schema_version;
            config.schema_version = SCHEMA_VERSION;
            storage::save_config(&env, &config);

            log!(&env, "schema migrated", from, SCHEMA_VERSION);
        }

        Ok(config.schema_version)
    }

    /// Swap the contract code in place; address and storage are preserved.
    pub fn upgrade(
        env: Env,
        caller: Address,
        new_wasm_hash: BytesN<32>,
    ) -> Result<(), AuctionError> {
        require_owner(&env, &caller)?;

        log!(&env, "contract upgraded", caller);
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }
}
