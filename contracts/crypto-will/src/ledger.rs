//! Fractional ownership of an executed will.
//!
//! After distribution the balances of a will always sum to `TOTAL_SHARES`,
//! and an address is listed in `owners` exactly when its balance is positive.

use shared::constants::{CONSENSUS_THRESHOLD_BPS, TOTAL_SHARES};
use shared::errors::Error;
use shared::types::{OwnershipInfo, Shares};
use soroban_sdk::{Address, Env, Vec};

use crate::storage::{get_balance, get_ownership, set_balance, set_ownership};

/// Empty, undistributed ledger created alongside a will
pub fn open(env: &Env, will_id: u64) {
    let ownership = OwnershipInfo {
        total_shares: TOTAL_SHARES,
        owners: Vec::new(env),
        distributed: false,
        asset_released: false,
    };
    set_ownership(env, will_id, &ownership);
}

/// One-time distribution: each heir receives its percentage.
///
/// Heirs are distinct (checked at creation), so no aggregation is needed.
pub fn distribute(
    env: &Env,
    will_id: u64,
    heirs: &Vec<Address>,
    percentages: &Vec<Shares>,
) -> Result<(), Error> {
    let mut ownership = get_ownership(env, will_id)?;
    if ownership.distributed {
        return Err(Error::AlreadyDistributed);
    }

    for (heir, percentage) in heirs.iter().zip(percentages.iter()) {
        set_balance(env, will_id, &heir, percentage);
        ownership.owners.push_back(heir);
    }
    ownership.distributed = true;
    set_ownership(env, will_id, &ownership);

    Ok(())
}

/// Move `amount` units from `from` to `to`, conserving the total.
pub fn transfer(
    env: &Env,
    will_id: u64,
    from: &Address,
    to: &Address,
    amount: Shares,
) -> Result<(), Error> {
    let mut ownership = get_ownership(env, will_id)?;
    if !ownership.distributed {
        return Err(Error::NotDistributed);
    }
    if to == from || *to == env.current_contract_address() {
        return Err(Error::InvalidRecipient);
    }
    if amount == 0 {
        return Err(Error::InvalidAmount);
    }

    let from_balance = get_balance(env, will_id, from);
    if from_balance == 0 {
        return Err(Error::CallerNotOwner);
    }
    if from_balance < amount {
        return Err(Error::InsufficientBalance);
    }

    let to_balance = get_balance(env, will_id, to);
    if to_balance == 0 {
        ownership.owners.push_back(to.clone());
    }
    let remaining = from_balance - amount;
    if remaining == 0 {
        swap_remove(&mut ownership.owners, from);
    }

    set_balance(env, will_id, from, remaining);
    set_balance(
        env,
        will_id,
        to,
        to_balance.checked_add(amount).ok_or(Error::InvalidAmount)?,
    );
    set_ownership(env, will_id, &ownership);

    Ok(())
}

/// The caller's balance, provided it is a strict majority of the total.
///
/// The owners list is scanned for the caller; more than one entry means the
/// ledger invariant is broken and nothing is counted.
pub fn consensus_balance(
    env: &Env,
    will_id: u64,
    ownership: &OwnershipInfo,
    caller: &Address,
) -> Result<Shares, Error> {
    let entries = ownership.owners.iter().filter(|o| o == caller).count();
    match entries {
        0 => return Err(Error::CallerNotOwner),
        1 => {}
        _ => return Err(Error::OwnerListCorrupted),
    }

    let balance = get_balance(env, will_id, caller);
    if balance <= CONSENSUS_THRESHOLD_BPS {
        return Err(Error::InsufficientConsensus);
    }
    Ok(balance)
}

fn swap_remove(owners: &mut Vec<Address>, owner: &Address) {
    if let Some(index) = owners.first_index_of(owner) {
        let last = owners.len() - 1;
        if index != last {
            let moved = owners.get_unchecked(last);
            owners.set(index, moved);
        }
        owners.pop_back();
    }
}
