use shared::constants::{MAX_COMMITMENTS, MAX_HEIRS, MAX_TRUSTEES, TOTAL_SHARES};
use shared::errors::Error;
use shared::types::{Shares, VssDealing, WillInfo};
use soroban_sdk::{Address, Vec};

/// Validate everything a new will is built from.
///
/// Checks run in a fixed order so that the reported error does not depend on
/// which part of the input is examined first: array lengths, participant
/// bounds, threshold, trustee uniqueness, then heir allocations.
/// Commitment values are taken as given.
pub fn validate_creation(
    heirs: &Vec<Address>,
    percentages: &Vec<Shares>,
    dealing: &VssDealing,
) -> Result<(), Error> {
    // Parallel arrays
    let n = dealing.trustees.len();
    if dealing.secret_shares.len() != n
        || dealing.blinding_shares.len() != n
        || dealing.x_coordinates.len() != n
        || heirs.len() != percentages.len()
    {
        return Err(Error::LengthMismatch);
    }

    // Participant bounds
    if n > MAX_TRUSTEES
        || heirs.len() > MAX_HEIRS
        || dealing.commitments.len() > MAX_COMMITMENTS
    {
        return Err(Error::TooManyParticipants);
    }

    if dealing.threshold == 0 || dealing.threshold > n {
        return Err(Error::InvalidThreshold);
    }

    if has_duplicates(&dealing.trustees) {
        return Err(Error::DuplicateTrustee);
    }

    validate_percentages(heirs, percentages)
}

/// Heirs non-empty and distinct, allocations strictly positive and summing
/// to exactly `TOTAL_SHARES`.
fn validate_percentages(heirs: &Vec<Address>, percentages: &Vec<Shares>) -> Result<(), Error> {
    if heirs.is_empty() || has_duplicates(heirs) {
        return Err(Error::InvalidPercentageSet);
    }

    let mut total: Shares = 0;
    for percentage in percentages.iter() {
        if percentage == 0 {
            return Err(Error::InvalidPercentageSet);
        }
        total = total
            .checked_add(percentage)
            .ok_or(Error::InvalidPercentageSet)?;
    }

    if total != TOTAL_SHARES {
        return Err(Error::InvalidPercentageSet);
    }

    Ok(())
}

/// A will accepts trustee and execution calls only while active
pub fn validate_active(will: &WillInfo) -> Result<(), Error> {
    if will.active {
        Ok(())
    } else {
        Err(Error::RecordInactive)
    }
}

fn has_duplicates(addresses: &Vec<Address>) -> bool {
    for i in 0..addresses.len() {
        for j in (i + 1)..addresses.len() {
            if addresses.get_unchecked(i) == addresses.get_unchecked(j) {
                return true;
            }
        }
    }
    false
}
