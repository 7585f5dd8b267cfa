use soroban_sdk::{contractclient, Address, Env};

/// The external contract that records who holds an asset.
///
/// A will touches custody only through this interface: `owner_of` once at
/// creation to authorize the creator, `transfer_from` into custody at
/// creation and out of custody at claim.
#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistry {
    fn owner_of(env: Env, asset_id: u64) -> Address;

    /// Fails unless `from` currently holds `asset_id`.
    fn transfer_from(env: Env, from: Address, to: Address, asset_id: u64);
}
