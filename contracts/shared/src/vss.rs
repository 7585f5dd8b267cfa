//! Pedersen verifiable secret sharing: share verification against
//! coefficient commitments and threshold reconstruction.
//!
//! A dealer picks `F(x) = f_0 + f_1 x + ... + f_{k-1} x^{k-1}` with the
//! secret as `f_0`, a blinding polynomial `G(x)` of the same degree, and
//! publishes `C_j = G^{f_j} H^{g_j} mod P`. Trustee `i` receives
//! `(F(x_i), G(x_i))`, both reduced mod `Q`. Nothing here generates
//! polynomials; dealing happens off chain.

use soroban_sdk::{Bytes, BytesN, Env};

use crate::constants::{GENERATOR_G, GENERATOR_H};
use crate::errors::Error;
use crate::field::{GROUP, SCALAR};
use crate::types::SharePoint;

/// Check `G^s * H^t == prod_j C_j^(x^j) (mod P)`.
///
/// `x^j` is accumulated in the exponent ring, one multiplication per
/// commitment.
pub fn verify_share<I>(
    secret_share: u64,
    blinding_share: u64,
    x_coordinate: u64,
    commitments: I,
) -> bool
where
    I: IntoIterator<Item = u64>,
{
    let left = GROUP.mulmod(
        GROUP.modexp(GENERATOR_G, secret_share),
        GROUP.modexp(GENERATOR_H, blinding_share),
    );

    let x = SCALAR.reduce(x_coordinate);
    let mut x_power = 1u64;
    let mut right = 1u64;
    for commitment in commitments {
        right = GROUP.mulmod(right, GROUP.modexp(commitment, x_power));
        x_power = SCALAR.mulmod(x_power, x);
    }

    left == right
}

/// Recover `F(0)` from revealed shares by Lagrange interpolation mod `Q`.
///
/// The first `threshold` points are used. Fewer points than `threshold`, or
/// two selected points sharing an evaluation point, are rejected.
pub fn reconstruct(points: &[SharePoint], threshold: u32) -> Result<u64, Error> {
    if threshold == 0 {
        return Err(Error::InvalidThreshold);
    }
    let threshold = threshold as usize;
    if points.len() < threshold {
        return Err(Error::InsufficientRevealedShares);
    }
    let selected = &points[..threshold];

    for (i, a) in selected.iter().enumerate() {
        if selected[i + 1..]
            .iter()
            .any(|b| SCALAR.reduce(a.x) == SCALAR.reduce(b.x))
        {
            return Err(Error::DuplicateEvaluationPoint);
        }
    }

    let mut secret = 0u64;
    for (i, point) in selected.iter().enumerate() {
        let mut numerator = 1u64;
        let mut denominator = 1u64;
        for (j, other) in selected.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = SCALAR.mulmod(numerator, SCALAR.neg(other.x));
            denominator = SCALAR.mulmod(denominator, SCALAR.sub(point.x, other.x));
        }

        let coefficient = SCALAR.mulmod(numerator, SCALAR.modinverse(denominator)?);
        secret = SCALAR.add(secret, SCALAR.mulmod(SCALAR.reduce(point.y), coefficient));
    }

    Ok(secret)
}

/// Horner evaluation mod `Q`.
pub fn evaluate_polynomial(coefficients: &[u64], x: u64) -> u64 {
    let x = SCALAR.reduce(x);
    coefficients
        .iter()
        .rev()
        .fold(0u64, |acc, c| SCALAR.add(SCALAR.mulmod(acc, x), *c))
}

/// Pedersen commitment `G^a * H^b mod P`.
pub fn commit(a: u64, b: u64) -> u64 {
    GROUP.mulmod(GROUP.modexp(GENERATOR_G, a), GROUP.modexp(GENERATOR_H, b))
}

/// SHA-256 of the secret encoded as 32 big-endian bytes.
pub fn secret_digest(env: &Env, secret: u64) -> BytesN<32> {
    let mut buf = [0u8; 32];
    buf[24..].copy_from_slice(&secret.to_be_bytes());
    env.crypto().sha256(&Bytes::from_array(env, &buf)).into()
}
