//! Shamir secret sharing over a prime field, operating on plain integers.
//!
//! This is the "honest dealer" core described in the Rabin–Ben-Or paper: splitting a secret
//! integer into `n` evaluation points of a random degree-`(t-1)` polynomial, and recovering it
//! by interpolating at zero. It knows nothing about players or authentication; `robust-sharing`
//! builds those on top.

use crate::{
    csprng::{distinct_positive_in_field, SamplingError},
    errors::ConfigurationError,
    polynomial::{evaluate, interpolate_at_zero},
    primes::prime_for_bitlength,
};
use num_bigint::{BigInt, BigUint};

/// Failure of [`share_int`].
#[derive(thiserror::Error, Debug)]
pub enum ShareError {
    /// The parameters violated a sharing invariant.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Sampling the random coefficients failed.
    #[error(transparent)]
    Sampling(#[from] SamplingError),

    /// Polynomial evaluation failed despite a nonempty coefficient list; unreachable in
    /// practice since `share_int` always seeds at least the secret as a coefficient.
    #[error(transparent)]
    Evaluation(#[from] crate::errors::DomainError),
}

/// Failure of [`reconstruct_int`].
#[derive(thiserror::Error, Debug)]
pub enum ReconstructError {
    /// The parameters violated a sharing invariant.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Interpolation failed (e.g. no points were given).
    #[error(transparent)]
    Domain(#[from] crate::errors::DomainError),
}

/// Selects the sharing prime for `n` players and a secret bounded by `L` bytes, per spec.md
/// §3: the smallest Mersenne prime whose exponent strictly exceeds
/// `max(bits(n), 8*(L+1))`.
pub fn sharing_prime(n: u64, secret_byte_len: u64) -> Result<BigUint, ConfigurationError> {
    let n_bits = 64 - n.leading_zeros() as i64;
    let secret_bits = (secret_byte_len + 1) * 8;
    let bits = n_bits.max(secret_bits as i64);
    prime_for_bitlength(bits)
}

/// Splits `secret_int` into `n` evaluation points of a random degree-`(t-1)` polynomial whose
/// constant term is `secret_int`.
///
/// Returns the list `[(alpha_i, f(alpha_i))]` for `alpha_i` in `1..=n`.
///
/// # Errors
/// Returns [`ConfigurationError`] if `1 <= t <= n`, `secret_int < p`, or `n < p` does not hold,
/// where `p` is the prime selected for this `(n, L)` pair.
pub fn share_int(n: u64, t: u64, secret_byte_len: u64, secret_int: &BigUint) -> Result<Vec<(BigUint, BigUint)>, ShareError> {
    let p = sharing_prime(n, secret_byte_len)?;
    if t < 1 || t > n {
        return Err(ConfigurationError::InvalidThreshold { t, n }.into());
    }
    if secret_int >= &p {
        return Err(ConfigurationError::SecretTooLarge.into());
    }
    if BigUint::from(n) >= p {
        return Err(ConfigurationError::TooManyPlayers.into());
    }

    let mut coeffs = Vec::with_capacity(t as usize);
    coeffs.push(secret_int.clone());
    if t > 1 {
        coeffs.extend(distinct_positive_in_field(t - 1, &p)?);
    }

    let mut points = Vec::with_capacity(n as usize);
    for i in 1..=n {
        let y = evaluate(&coeffs, &BigInt::from(i), &p)?;
        points.push((BigUint::from(i), y));
    }
    Ok(points)
}

/// Recovers the secret integer from `points`, using the prime selected for this `(n, L)` pair.
///
/// # Errors
/// Propagates [`ConfigurationError`] if no prime exists for this configuration, or
/// [`crate::errors::DomainError`] if `points` is empty.
pub fn reconstruct_int(n: u64, secret_byte_len: u64, points: &[(BigUint, BigUint)]) -> Result<BigUint, ReconstructError> {
    let p = sharing_prime(n, secret_byte_len)?;
    Ok(interpolate_at_zero(points, &p)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(5, 3)]
    #[case(2, 2)]
    #[case(9, 5)]
    #[case(40, 2)]
    fn split_and_reconstruct_with_threshold_shares(#[case] n: u64, #[case] t: u64) {
        let secret = BigUint::from(424_242u64);
        let points = share_int(n, t, 4, &secret).unwrap();
        assert_eq!(points.len() as u64, n);

        let chosen: Vec<_> = points.into_iter().take(t as usize).collect();
        let recovered = reconstruct_int(n, 4, &chosen).unwrap();
        assert_eq!(recovered, secret);
    }

    #[test]
    fn rejects_threshold_above_player_count() {
        let secret = BigUint::from(1u32);
        let err = share_int(2, 5, 32, &secret).unwrap_err();
        assert!(matches!(err, ShareError::Configuration(ConfigurationError::InvalidThreshold { t: 5, n: 2 })));
    }

    #[test]
    fn rejects_zero_threshold() {
        let secret = BigUint::from(1u32);
        let err = share_int(5, 0, 32, &secret).unwrap_err();
        assert!(matches!(err, ShareError::Configuration(ConfigurationError::InvalidThreshold { t: 0, n: 5 })));
    }

    #[test]
    fn fewer_than_threshold_points_does_not_reveal_secret() {
        let secret = BigUint::from(99_999u64);
        let points = share_int(5, 3, 4, &secret).unwrap();
        let insufficient: Vec<_> = points.into_iter().take(2).collect();
        let recovered = reconstruct_int(5, 4, &insufficient).unwrap();
        // With too few points interpolation still returns *some* value, but it need not (and in
        // general will not) be the secret.
        assert_ne!(recovered, secret);
    }
}
