use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Creation Errors
    NotAssetOwner = 1,
    LengthMismatch = 2,
    InvalidThreshold = 3,
    InvalidPercentageSet = 4,
    DuplicateTrustee = 5,
    TooManyParticipants = 6,

    // Record Errors
    RecordNotFound = 7,
    RecordInactive = 8,

    // Trustee Errors
    CallerNotTrustee = 9,
    AlreadyVerified = 10,
    ShareNotVerified = 11,
    AlreadyRevealed = 12,

    // Execution Errors
    AlreadyClaimed = 13,
    InsufficientRevealedShares = 14,
    AlreadyDistributed = 15,

    // Ownership Errors
    NotDistributed = 16,
    CallerNotOwner = 17,
    InvalidRecipient = 18,
    InvalidAmount = 19,
    InsufficientBalance = 20,
    InsufficientConsensus = 21,
    AssetAlreadyReleased = 22,
    OwnerListCorrupted = 23,

    // Field Errors
    NonInvertible = 24,
    DuplicateEvaluationPoint = 25,
}
