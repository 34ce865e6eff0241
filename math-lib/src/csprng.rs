//! Uniform random field elements sourced from OS entropy.
//!
//! The OS's cryptographically secure entropy source is the sole source of randomness anywhere
//! in this crate — no userspace PRNG substitutes for it, per the design notes. [`rand::rngs::OsRng`]
//! reads directly from the OS source on every call rather than seeding a userspace generator
//! once, which is what makes it the right primitive here.

use crate::errors::{ConfigurationError, EntropyUnavailable};
use num_bigint::BigUint;
use rand::{rngs::OsRng, RngCore};
use std::collections::HashSet;

/// Reads a uniform random integer in `[0, p)` from OS entropy.
///
/// # Errors
/// Returns [`EntropyUnavailable`] if the OS entropy source could not be reached.
pub fn rand_in_field(p: &BigUint) -> Result<BigUint, EntropyUnavailable> {
    let byte_len = p.bits().div_ceil(8) as usize;
    let mut buf = vec![0u8; byte_len.max(1)];
    OsRng.try_fill_bytes(&mut buf)?;
    Ok(BigUint::from_bytes_be(&buf) % p)
}

/// Reads a uniform random integer in `[1, p)` from OS entropy, resampling on zero.
///
/// # Errors
/// Returns [`EntropyUnavailable`] if the OS entropy source could not be reached.
pub fn rand_positive_in_field(p: &BigUint) -> Result<BigUint, EntropyUnavailable> {
    loop {
        let candidate = rand_in_field(p)?;
        if !candidate.eq(&BigUint::from(0u32)) {
            return Ok(candidate);
        }
    }
}

/// Draws `n` distinct positive integers in `[1, p)` from OS entropy.
///
/// Rejection of zero and of duplicates never biases the sampler: the set of values that survive
/// rejection is closed under the uniform measure, so every surviving outcome remains equally
/// likely.
///
/// # Errors
/// Returns [`ConfigurationError::FieldTooSmall`] if `n >= p` (the field cannot hold that many
/// distinct nonzero values), or [`EntropyUnavailable`] if the OS entropy source could not be
/// reached.
pub fn distinct_positive_in_field(n: u64, p: &BigUint) -> Result<Vec<BigUint>, SamplingError> {
    if BigUint::from(n) >= *p {
        return Err(SamplingError::Configuration(ConfigurationError::FieldTooSmall {
            requested: n,
            prime_bits: p.bits(),
        }));
    }
    let mut seen = HashSet::with_capacity(n as usize);
    let mut values = Vec::with_capacity(n as usize);
    while values.len() < n as usize {
        let candidate = rand_positive_in_field(p)?;
        if seen.insert(candidate.clone()) {
            values.push(candidate);
        }
    }
    Ok(values)
}

/// Failure of a sampling operation that can both misconfigure and fail on entropy.
#[derive(thiserror::Error, Debug)]
pub enum SamplingError {
    /// The field was too small to hold the requested number of distinct values.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The OS entropy source could not be reached.
    #[error(transparent)]
    Entropy(#[from] EntropyUnavailable),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_values_are_below_the_field() {
        let p = BigUint::from(1_000_003u64);
        for _ in 0..50 {
            let value = rand_in_field(&p).unwrap();
            assert!(value < p);
        }
    }

    #[test]
    fn positive_sampling_never_returns_zero() {
        let p = BigUint::from(5u64);
        for _ in 0..50 {
            assert_ne!(rand_positive_in_field(&p).unwrap(), BigUint::from(0u32));
        }
    }

    #[test]
    fn distinct_sampling_returns_requested_count() {
        let p = BigUint::from(101u64);
        let values = distinct_positive_in_field(10, &p).unwrap();
        assert_eq!(values.len(), 10);
        let unique: HashSet<_> = values.iter().cloned().collect();
        assert_eq!(unique.len(), 10);
        assert!(values.iter().all(|v| *v > BigUint::from(0u32) && *v < p));
    }

    #[test]
    fn distinct_sampling_rejects_field_too_small() {
        let p = BigUint::from(5u64);
        let err = distinct_positive_in_field(5, &p).unwrap_err();
        assert!(matches!(err, SamplingError::Configuration(ConfigurationError::FieldTooSmall { .. })));
    }

    #[test]
    fn distinct_sampling_accepts_exact_boundary() {
        let p = BigUint::from(5u64);
        // 4 distinct positive values fit in {1, 2, 3, 4}.
        let values = distinct_positive_in_field(4, &p).unwrap();
        assert_eq!(values.len(), 4);
    }
}
