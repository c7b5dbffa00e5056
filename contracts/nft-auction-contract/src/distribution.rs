use soroban_sdk::{token, Address, Env};

use crate::external::AssetCustodianClient;
use crate::types::{AssetRef, Config, Currency};

// Token contract backing a currency
pub fn currency_address(config: &Config, currency: &Currency) -> Address {
    match currency {
        Currency::Native => config.native_token.clone(),
        Currency::Token(token) => token.clone(),
    }
}

// Pull bid funds into escrow
pub fn pull_funds(env: &Env, config: &Config, currency: &Currency, payer: &Address, amount: &i128) {
    let engine = env.current_contract_address();
    let client = token::Client::new(env, &currency_address(config, currency));
    match currency {
        // Attached value, authorized by the payer as part of the call
        Currency::Native => client.transfer(payer, &engine, amount),
        // Allowance previously granted to the engine
        Currency::Token(_) => client.transfer_from(&engine, payer, &engine, amount),
    }
}

// Push escrowed funds out of the contract
pub fn push_funds(env: &Env, config: &Config, currency: &Currency, payee: &Address, amount: &i128) {
    if *amount == 0 {
        return;
    }
    token::Client::new(env, &currency_address(config, currency)).transfer(
        &env.current_contract_address(),
        payee,
        amount,
    );
}

// Take custody of the asset
pub fn pull_asset(env: &Env, asset: &AssetRef, from: &Address) {
    let engine = env.current_contract_address();
    AssetCustodianClient::new(env, &asset.collection).transfer_from(
        &engine,
        from,
        &engine,
        &asset.token_id,
    );
}

// Release custody of the asset
pub fn push_asset(env: &Env, asset: &AssetRef, to: &Address) {
    AssetCustodianClient::new(env, &asset.collection).transfer(
        &env.current_contract_address(),
        to,
        &asset.token_id,
    );
}
