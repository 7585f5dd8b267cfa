//! Protocol parameters, fixed at deployment and identical for every will.
//!
//! These are toy-sized values. The modulus fits in 62 bits so that products
//! of two elements fit in a `u128`, and nothing proves that `log_G(H)` is
//! unknown. A production deployment needs a properly sized group (or curve)
//! and generators derived so that no party knows their discrete-log relation.

/// Safe prime `P = 2Q + 1`; commitments are computed modulo `P`.
pub const PRIME_MODULUS: u64 = 4_611_686_018_427_376_319;

/// Prime order `Q` of the subgroup generated by `G` and `H`; shares,
/// evaluation points and interpolation live modulo `Q`.
pub const GROUP_ORDER: u64 = 2_305_843_009_213_688_159;

/// First commitment generator (a quadratic residue mod `P`).
pub const GENERATOR_G: u64 = 2;

/// Second commitment generator (a quadratic residue mod `P`).
pub const GENERATOR_H: u64 = 3;

/// Ownership units handed out at distribution (basis points, 10000 = 100%).
pub const TOTAL_SHARES: u32 = 10_000;

/// A claimant must hold strictly more than this many units.
pub const CONSENSUS_THRESHOLD_BPS: u32 = 5_000;

/// Maximum trustees per will.
pub const MAX_TRUSTEES: u32 = 32;

/// Maximum heirs per will.
pub const MAX_HEIRS: u32 = 32;

/// Maximum commitments per will. Verification performs one exponentiation
/// per commitment, and a degree above `MAX_TRUSTEES - 1` cannot be met.
pub const MAX_COMMITMENTS: u32 = MAX_TRUSTEES;
