use soroban_sdk::Env;

use crate::errors::AuctionError;
use crate::storage::DataKey;

/// Runs `f` with the reentrancy flag raised.
///
/// A nested call into any guarded entry point while `f` is running fails with
/// `ReentrantCall`. When `f` fails the host rolls back the whole invocation,
/// flag included.
pub fn non_reentrant<T, F>(env: &Env, f: F) -> Result<T, AuctionError>
where
    F: FnOnce() -> Result<T, AuctionError>,
{
    let entered: bool = env
        .storage()
        .instance()
        .get(&DataKey::Entered)
        .unwrap_or(false);
    if entered {
        return Err(AuctionError::ReentrantCall);
    }
    env.storage().instance().set(&DataKey::Entered, &true);

    let result = f();

    env.storage().instance().remove(&DataKey::Entered);
    result
}
