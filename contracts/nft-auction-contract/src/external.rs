use soroban_sdk::{contractclient, Address};

/// Interface of the NFT registry that holds the auctioned assets.
///
/// Both calls must either move the asset or abort the invocation.
#[allow(dead_code)]
#[contractclient(name = "AssetCustodianClient")]
pub trait AssetCustodian {
    /// Moves `token_id` owned by `from`. `from` must authorize.
    fn transfer(from: Address, to: Address, token_id: u32);

    /// Moves `token_id` owned by `from` on behalf of `spender`, which must be
    /// the owner or approved for the token.
    fn transfer_from(spender: Address, from: Address, to: Address, token_id: u32);
}
