use shared::errors::Error;
use shared::types::{OwnershipInfo, Shares, TrusteeShare, WillInfo};
use soroban_sdk::{contracttype, Address, Env, Vec};

/// Storage keys for will records and their ownership ledgers
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    NextWillId,                // -> next id to allocate
    Will(u64),                 // will_id -> WillInfo
    Commitments(u64),          // will_id -> Vec<u64>
    Trustee(u64, Address),     // will_id, trustee -> TrusteeShare
    Ownership(u64),            // will_id -> OwnershipInfo
    Balance(u64, Address),     // will_id, owner -> Shares
}

/// Allocate the next will id, starting at 1
pub fn next_will_id(env: &Env) -> u64 {
    let id = env
        .storage()
        .instance()
        .get::<DataKey, u64>(&DataKey::NextWillId)
        .unwrap_or(1);
    env.storage().instance().set(&DataKey::NextWillId, &(id + 1));
    id
}

/// Number of wills created so far
pub fn will_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get::<DataKey, u64>(&DataKey::NextWillId)
        .unwrap_or(1)
        - 1
}

/// Store will information
pub fn set_will(env: &Env, will: &WillInfo) {
    env.storage().persistent().set(&DataKey::Will(will.id), will);
}

/// Retrieve will information
pub fn get_will(env: &Env, will_id: u64) -> Result<WillInfo, Error> {
    env.storage()
        .persistent()
        .get::<DataKey, WillInfo>(&DataKey::Will(will_id))
        .ok_or(Error::RecordNotFound)
}

pub fn set_commitments(env: &Env, will_id: u64, commitments: &Vec<u64>) {
    env.storage()
        .persistent()
        .set(&DataKey::Commitments(will_id), commitments);
}

pub fn get_commitments(env: &Env, will_id: u64) -> Result<Vec<u64>, Error> {
    env.storage()
        .persistent()
        .get::<DataKey, Vec<u64>>(&DataKey::Commitments(will_id))
        .ok_or(Error::RecordNotFound)
}

/// Store a trustee's share
pub fn set_trustee_share(env: &Env, will_id: u64, trustee: &Address, share: &TrusteeShare) {
    let key = DataKey::Trustee(will_id, trustee.clone());
    env.storage().persistent().set(&key, share);
}

/// Retrieve a trustee's share; absent means the address is not a trustee
pub fn get_trustee_share(env: &Env, will_id: u64, trustee: &Address) -> Result<TrusteeShare, Error> {
    let key = DataKey::Trustee(will_id, trustee.clone());
    env.storage()
        .persistent()
        .get::<DataKey, TrusteeShare>(&key)
        .ok_or(Error::CallerNotTrustee)
}

pub fn set_ownership(env: &Env, will_id: u64, ownership: &OwnershipInfo) {
    env.storage()
        .persistent()
        .set(&DataKey::Ownership(will_id), ownership);
}

pub fn get_ownership(env: &Env, will_id: u64) -> Result<OwnershipInfo, Error> {
    env.storage()
        .persistent()
        .get::<DataKey, OwnershipInfo>(&DataKey::Ownership(will_id))
        .ok_or(Error::RecordNotFound)
}

/// Store an owner's balance; a zero balance removes the entry
pub fn set_balance(env: &Env, will_id: u64, owner: &Address, balance: Shares) {
    let key = DataKey::Balance(will_id, owner.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
    }
}

/// Retrieve an owner's balance, defaults to 0
pub fn get_balance(env: &Env, will_id: u64, owner: &Address) -> Shares {
    let key = DataKey::Balance(will_id, owner.clone());
    env.storage()
        .persistent()
        .get::<DataKey, Shares>(&key)
        .unwrap_or(0)
}
