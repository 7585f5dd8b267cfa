#![no_std]

//! Inheritance contract secured by Pedersen verifiable secret sharing.
//!
//! A testator escrows an asset and deals a secret to trustees off chain,
//! publishing one commitment per polynomial coefficient. Trustees verify
//! their shares against the commitments and reveal them. Once `threshold`
//! verified shares are revealed the will executes and heirs receive
//! fractional ownership, which they can transfer; a strict majority holder
//! can claim the asset out of custody.
//!
//! Trust model: execution is authorized by a threshold of individually
//! verified, revealed shares. The secret itself is not reconstructed on the
//! execution path; `reconstruct_secret` exposes it as a read-only query.

extern crate alloc;

use alloc::vec::Vec as StdVec;
use shared::{
    constants::{GENERATOR_G, GENERATOR_H, GROUP_ORDER, PRIME_MODULUS, TOTAL_SHARES},
    errors::Error,
    events::*,
    types::{
        AssetRef, OwnershipInfo, ProtocolParams, Shares, SharePoint, TrusteeShare, TrusteeStatus,
        VssDealing, WillInfo,
    },
    vss,
};
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Vec};

mod ledger;
mod registry;
mod storage;
mod validation;


pub use registry::{AssetRegistry, AssetRegistryClient};
use storage::*;

#[contract]
pub struct CryptoWillContract;

#[contractimpl]
impl CryptoWillContract {
    /// Create a will and take custody of its asset
    ///
    /// # Arguments
    /// * `creator` - Current holder of the asset
    /// * `asset` - Registry contract and asset id
    /// * `heirs` - Distinct heir addresses
    /// * `percentages` - Basis points per heir, summing to 10000
    /// * `dealing` - Trustees with their dealt shares, commitments and threshold
    ///
    /// # Returns
    /// * `u64` - The new will id
    pub fn create_will(
        env: Env,
        creator: Address,
        asset: AssetRef,
        heirs: Vec<Address>,
        percentages: Vec<Shares>,
        dealing: VssDealing,
    ) -> Result<u64, Error> {
        creator.require_auth();

        // Validate inputs
        validation::validate_creation(&heirs, &percentages, &dealing)?;

        // Creator must hold the asset
        let registry = AssetRegistryClient::new(&env, &asset.registry);
        if registry.owner_of(&asset.asset_id) != creator {
            return Err(Error::NotAssetOwner);
        }

        let will_id = next_will_id(&env);

        // Store trustee shares and commitments
        for i in 0..dealing.trustees.len() {
            let share = TrusteeShare {
                secret_share: dealing.secret_shares.get_unchecked(i),
                blinding_share: dealing.blinding_shares.get_unchecked(i),
                x_coordinate: dealing.x_coordinates.get_unchecked(i),
                committed: true,
                verified: false,
                revealed: false,
            };
            set_trustee_share(&env, will_id, &dealing.trustees.get_unchecked(i), &share);
        }
        set_commitments(&env, will_id, &dealing.commitments);

        // Store will and empty ownership ledger
        let will = WillInfo {
            id: will_id,
            creator: creator.clone(),
            asset: asset.clone(),
            heirs,
            percentages,
            trustees: dealing.trustees,
            threshold: dealing.threshold,
            active: true,
            claimed: false,
            revealed_count: 0,
            created_at: env.ledger().timestamp(),
        };
        set_will(&env, &will);
        ledger::open(&env, will_id);

        // Take custody of the asset
        registry.transfer_from(&creator, &env.current_contract_address(), &asset.asset_id);

        // Emit event
        env.events()
            .publish((WILL_CREATED,), (will_id, creator, dealing.commitments));

        Ok(will_id)
    }

    /// Check a trustee's stored share against the will's commitments
    ///
    /// A successful verification is final. A failed one is recorded as
    /// unverified and may be retried.
    ///
    /// # Returns
    /// * `bool` - Whether the share matches the commitments
    pub fn verify_share(env: Env, will_id: u64, trustee: Address) -> Result<bool, Error> {
        trustee.require_auth();

        let will = get_will(&env, will_id)?;
        validation::validate_active(&will)?;

        let mut share = get_trustee_share(&env, will_id, &trustee)?;
        if share.verified {
            return Err(Error::AlreadyVerified);
        }

        // Check share against commitments
        let commitments = get_commitments(&env, will_id)?;
        let valid = vss::verify_share(
            share.secret_share,
            share.blinding_share,
            share.x_coordinate,
            commitments.iter(),
        );
        if !valid {
            log!(&env, "share rejected", will_id, trustee);
        }

        share.verified = valid;
        set_trustee_share(&env, will_id, &trustee, &share);

        // Emit event
        env.events()
            .publish((SHARE_VERIFIED,), (will_id, trustee, valid));

        Ok(valid)
    }

    /// Reveal a verified share, counting it toward the threshold
    pub fn reveal_share(env: Env, will_id: u64, trustee: Address) -> Result<(), Error> {
        trustee.require_auth();

        let mut will = get_will(&env, will_id)?;
        validation::validate_active(&will)?;

        let mut share = get_trustee_share(&env, will_id, &trustee)?;
        if !share.verified {
            return Err(Error::ShareNotVerified);
        }
        if share.revealed {
            return Err(Error::AlreadyRevealed);
        }

        // Count the reveal
        share.revealed = true;
        will.revealed_count += 1;
        set_trustee_share(&env, will_id, &trustee, &share);
        set_will(&env, &will);

        // Emit event
        env.events()
            .publish((SHARE_REVEALED,), (will_id, trustee, will.revealed_count));

        Ok(())
    }

    /// Execute a will once enough shares are revealed and distribute
    /// ownership to its heirs. Callable by anyone, at most once.
    pub fn execute_will(env: Env, will_id: u64) -> Result<(), Error> {
        let mut will = get_will(&env, will_id)?;
        validation::validate_active(&will)?;

        if will.claimed {
            return Err(Error::AlreadyClaimed);
        }
        if will.revealed_count < will.threshold {
            return Err(Error::InsufficientRevealedShares);
        }

        // Mark executed and hand out ownership
        will.claimed = true;
        set_will(&env, &will);
        ledger::distribute(&env, will_id, &will.heirs, &will.percentages)?;

        // Emit events
        env.events()
            .publish((WILL_EXECUTED,), (will_id, will.revealed_count));
        env.events()
            .publish((OWNERSHIP_DISTRIBUTED,), (will_id, will.heirs));

        Ok(())
    }

    /// Transfer ownership units between addresses
    ///
    /// # Arguments
    /// * `from` - Current holder, must authorize
    /// * `to` - Recipient, distinct from `from`
    /// * `amount` - Units to move, at most `from`'s balance
    pub fn transfer_shares(
        env: Env,
        will_id: u64,
        from: Address,
        to: Address,
        amount: Shares,
    ) -> Result<(), Error> {
        from.require_auth();
        get_will(&env, will_id)?;

        ledger::transfer(&env, will_id, &from, &to, amount)?;

        // Emit event
        env.events()
            .publish((SHARES_TRANSFERRED,), (will_id, from, to, amount));

        Ok(())
    }

    /// Release the asset to `recipient` on behalf of a strict majority holder.
    ///
    /// Only the caller's own balance counts; balances of distinct callers are
    /// never aggregated.
    pub fn claim_asset(
        env: Env,
        will_id: u64,
        caller: Address,
        recipient: Address,
    ) -> Result<(), Error> {
        caller.require_auth();

        let will = get_will(&env, will_id)?;
        let mut ownership = get_ownership(&env, will_id)?;
        if !ownership.distributed {
            return Err(Error::NotDistributed);
        }
        if recipient == env.current_contract_address() {
            return Err(Error::InvalidRecipient);
        }
        if ownership.asset_released {
            return Err(Error::AssetAlreadyReleased);
        }

        // Caller alone must hold a strict majority
        let balance = ledger::consensus_balance(&env, will_id, &ownership, &caller)?;
        log!(&env, "asset claimed", will_id, balance);

        // Release custody
        ownership.asset_released = true;
        set_ownership(&env, will_id, &ownership);

        let registry = AssetRegistryClient::new(&env, &will.asset.registry);
        registry.transfer_from(
            &env.current_contract_address(),
            &recipient,
            &will.asset.asset_id,
        );

        // Emit event
        env.events()
            .publish((ASSET_CLAIMED,), (will_id, caller, recipient));

        Ok(())
    }

    /// Reconstruct the secret from revealed shares, taking revealed trustees
    /// in registration order until the threshold is met.
    pub fn reconstruct_secret(env: Env, will_id: u64) -> Result<u64, Error> {
        let will = get_will(&env, will_id)?;

        let mut points: StdVec<SharePoint> = StdVec::new();
        for trustee in will.trustees.iter() {
            if points.len() == will.threshold as usize {
                break;
            }
            let share = get_trustee_share(&env, will_id, &trustee)?;
            if share.revealed {
                points.push(share.point());
            }
        }

        vss::reconstruct(&points, will.threshold)
    }

    /// Whether the reconstructed secret hashes to `expected`
    /// (SHA-256 over the 32-byte big-endian secret)
    pub fn secret_matches(env: Env, will_id: u64, expected: BytesN<32>) -> Result<bool, Error> {
        let secret = Self::reconstruct_secret(env.clone(), will_id)?;
        Ok(vss::secret_digest(&env, secret) == expected)
    }

    // ==================== Queries ====================

    pub fn get_will(env: Env, will_id: u64) -> Result<WillInfo, Error> {
        get_will(&env, will_id)
    }

    pub fn get_trustee_status(
        env: Env,
        will_id: u64,
        trustee: Address,
    ) -> Result<TrusteeStatus, Error> {
        get_will(&env, will_id)?;
        Ok(get_trustee_share(&env, will_id, &trustee)?.status())
    }

    pub fn get_commitments(env: Env, will_id: u64) -> Result<Vec<u64>, Error> {
        get_commitments(&env, will_id)
    }

    pub fn balance_of(env: Env, will_id: u64, owner: Address) -> Result<Shares, Error> {
        get_ownership(&env, will_id)?;
        Ok(get_balance(&env, will_id, &owner))
    }

    pub fn get_owners(env: Env, will_id: u64) -> Result<Vec<Address>, Error> {
        Ok(get_ownership(&env, will_id)?.owners)
    }

    pub fn get_ownership(env: Env, will_id: u64) -> Result<OwnershipInfo, Error> {
        get_ownership(&env, will_id)
    }

    pub fn is_distributed(env: Env, will_id: u64) -> Result<bool, Error> {
        Ok(get_ownership(&env, will_id)?.distributed)
    }

    pub fn total_shares(_env: Env) -> Shares {
        TOTAL_SHARES
    }

    pub fn protocol_params(_env: Env) -> ProtocolParams {
        ProtocolParams {
            prime: PRIME_MODULUS,
            group_order: GROUP_ORDER,
            g: GENERATOR_G,
            h: GENERATOR_H,
        }
    }

    pub fn will_count(env: Env) -> u64 {
        will_count(&env)
    }
}
