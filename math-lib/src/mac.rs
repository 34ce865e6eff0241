//! The Rabin–Ben-Or two-wise-independent information-theoretic MAC ("check vector").
//!
//! `generate` produces a key `y` and a tag `(b, c)` with `c = message + b*y (mod q)`; `validate`
//! checks the same equation. For a fixed message, forging a tag for a different message without
//! knowing the key succeeds with probability exactly `1/(q-1)`, which is why `q` is chosen with
//! at least [`crate::primes::MIN_AUTH_PRIME_BITS`] bits.

use crate::{
    csprng::{rand_in_field, rand_positive_in_field, SamplingError},
    errors::{ConfigurationError, EntropyUnavailable},
    primes::{prime_for_bitlength, MIN_AUTH_PRIME_BITS},
};
use num_bigint::BigUint;

/// A MAC key: the value `y` used to authenticate a single tag.
pub type Key = BigUint;

/// A MAC tag: the pair `(b, c)` verifiable with the matching key.
pub type Tag = (BigUint, BigUint);

/// Failure generating or validating a check vector.
#[derive(thiserror::Error, Debug)]
pub enum MacError {
    /// The parameters violated a sizing invariant.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The OS entropy source could not be reached.
    #[error(transparent)]
    Entropy(#[from] EntropyUnavailable),
}

impl From<SamplingError> for MacError {
    fn from(value: SamplingError) -> Self {
        match value {
            SamplingError::Configuration(e) => MacError::Configuration(e),
            SamplingError::Entropy(e) => MacError::Entropy(e),
        }
    }
}

/// Selects the authentication prime `q` for a message bounded by `max_length` bytes: the
/// smallest Mersenne prime whose exponent strictly exceeds `max(107, 8*max_length)`.
pub fn auth_prime(max_length: u64) -> Result<BigUint, ConfigurationError> {
    let bits = i64::from(MIN_AUTH_PRIME_BITS).max((max_length * 8) as i64);
    prime_for_bitlength(bits)
}

/// Generates a fresh `(key, tag)` pair authenticating `message`.
///
/// `b` is drawn uniformly from `[1, q)`, `y` (the key) uniformly from `[0, q)`, and
/// `c = (message + b*y) mod q`.
///
/// # Errors
/// Propagates [`ConfigurationError`] if no prime exists for `max_length`, or
/// [`EntropyUnavailable`] if OS entropy could not be read.
pub fn generate(message: &BigUint, max_length: u64) -> Result<(Key, Tag), MacError> {
    let q = auth_prime(max_length)?;
    let b = rand_positive_in_field(&q)?;
    let y = rand_in_field(&q)?;
    let c = (message + &b * &y) % &q;
    Ok((y, (b, c)))
}

/// Verifies that `(key, tag)` authenticates `message` under the authentication prime selected
/// for `max_length`.
///
/// # Errors
/// Propagates [`ConfigurationError`] if no prime exists for `max_length`.
pub fn validate(key: &Key, tag: &Tag, message: &BigUint, max_length: u64) -> Result<bool, ConfigurationError> {
    let q = auth_prime(max_length)?;
    let (b, c) = tag;
    Ok((message + b * key) % &q == *c)
}

/// Generates `k` independent `(key, tag)` pairs over the same message.
///
/// # Errors
/// Propagates the same errors as [`generate`].
pub fn generate_batch(k: u64, message: &BigUint, max_length: u64) -> Result<Vec<(Key, Tag)>, MacError> {
    (0..k).map(|_| generate(message, max_length)).collect()
}

/// Validates `k` parallel `(key, tag)` pairs against the same message.
///
/// # Errors
/// Propagates [`ConfigurationError`] if no prime exists for `max_length`.
pub fn validate_batch(pairs: &[(Key, Tag)], message: &BigUint, max_length: u64) -> Result<Vec<bool>, ConfigurationError> {
    pairs.iter().map(|(key, tag)| validate(key, tag, message, max_length)).collect()
}
