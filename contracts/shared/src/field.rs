//! Modular arithmetic over a fixed prime modulus.
//!
//! Elements are `u64` values below the modulus. Every product is widened to
//! `u128` before reduction, which is exact as long as the modulus is below
//! `2^64`.

use crate::constants::{GROUP_ORDER, PRIME_MODULUS};
use crate::errors::Error;

/// The commitment group `Z_P^*`.
pub const GROUP: PrimeField = PrimeField::new(PRIME_MODULUS);

/// The scalar field `Z_Q` in which shares and evaluation points live.
pub const SCALAR: PrimeField = PrimeField::new(GROUP_ORDER);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrimeField {
    modulus: u64,
}

impl PrimeField {
    /// `modulus` must be an odd prime; inversion relies on Fermat's little theorem.
    pub const fn new(modulus: u64) -> Self {
        Self { modulus }
    }

    pub const fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn reduce(&self, a: u64) -> u64 {
        a % self.modulus
    }

    pub fn add(&self, a: u64, b: u64) -> u64 {
        ((self.reduce(a) as u128 + self.reduce(b) as u128) % self.modulus as u128) as u64
    }

    pub fn sub(&self, a: u64, b: u64) -> u64 {
        let (a, b) = (self.reduce(a), self.reduce(b));
        if a >= b {
            a - b
        } else {
            self.modulus - (b - a)
        }
    }

    pub fn neg(&self, a: u64) -> u64 {
        self.sub(0, a)
    }

    pub fn mulmod(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.modulus as u128) as u64
    }

    /// Square-and-multiply; `O(log exponent)` multiplications.
    pub fn modexp(&self, base: u64, exponent: u64) -> u64 {
        let mut result = 1 % self.modulus;
        let mut base = self.reduce(base);
        let mut exponent = exponent;

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = self.mulmod(result, base);
            }
            base = self.mulmod(base, base);
            exponent >>= 1;
        }

        result
    }

    /// `a^(m-2) mod m`. Zero has no inverse.
    pub fn modinverse(&self, a: u64) -> Result<u64, Error> {
        let a = self.reduce(a);
        if a == 0 {
            return Err(Error::NonInvertible);
        }
        Ok(self.modexp(a, self.modulus - 2))
    }
}
