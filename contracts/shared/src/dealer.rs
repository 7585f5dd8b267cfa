//! Off-chain dealer used by tests to produce consistent shares and
//! commitments. Never compiled into a contract build.

use alloc::vec::Vec;
use rand::{Rng, RngCore};

use crate::constants::GROUP_ORDER;
use crate::vss::{commit, evaluate_polynomial};

#[derive(Clone, Debug)]
pub struct DealtShare {
    pub x_coordinate: u64,
    pub secret_share: u64,
    pub blinding_share: u64,
}

#[derive(Clone, Debug)]
pub struct Dealing {
    pub secret: u64,
    pub commitments: Vec<u64>,
    pub shares: Vec<DealtShare>,
}

/// Deal from explicit coefficient vectors of equal length.
pub fn deal(f_coefficients: &[u64], g_coefficients: &[u64], x_coordinates: &[u64]) -> Dealing {
    assert_eq!(f_coefficients.len(), g_coefficients.len());

    let commitments = f_coefficients
        .iter()
        .zip(g_coefficients)
        .map(|(f, g)| commit(*f, *g))
        .collect();

    let shares = x_coordinates
        .iter()
        .map(|x| DealtShare {
            x_coordinate: *x,
            secret_share: evaluate_polynomial(f_coefficients, *x),
            blinding_share: evaluate_polynomial(g_coefficients, *x),
        })
        .collect();

    Dealing {
        secret: f_coefficients.first().copied().unwrap_or(0),
        commitments,
        shares,
    }
}

/// Deal `secret` with random higher coefficients. The blinding polynomial
/// has a zero constant term.
pub fn random_dealing<R: RngCore>(
    rng: &mut R,
    secret: u64,
    threshold: u32,
    x_coordinates: &[u64],
) -> Dealing {
    let mut f = Vec::with_capacity(threshold as usize);
    let mut g = Vec::with_capacity(threshold as usize);
    f.push(secret % GROUP_ORDER);
    g.push(0);
    for _ in 1..threshold {
        f.push(rng.gen_range(0..GROUP_ORDER));
        g.push(rng.gen_range(0..GROUP_ORDER));
    }
    deal(&f, &g, x_coordinates)
}
