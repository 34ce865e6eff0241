//! Lookup of fixed Mersenne primes by bit-length.
//!
//! A fixed, ordered table of Mersenne exponents stands in for a production-grade prime
//! generator (explicitly out of scope — see spec.md Non-goals). Every prime used anywhere in
//! this crate is `2^e - 1` for one of these exponents.

use crate::errors::ConfigurationError;
use num_bigint::BigUint;
use num_traits::One;

/// The fixed, ordered table of Mersenne prime exponents this crate draws from.
pub const MERSENNE_EXPONENTS: [u32; 20] =
    [2, 3, 5, 7, 13, 17, 19, 31, 61, 89, 107, 127, 521, 607, 1279, 2203, 2281, 3217, 4253, 4423];

/// The minimum bit-length the authentication prime must exceed, per spec.md §4.7.
pub const MIN_AUTH_PRIME_BITS: u32 = 107;

/// Returns the smallest Mersenne prime in the fixed table whose exponent strictly exceeds
/// `bits`.
///
/// # Errors
/// Returns [`ConfigurationError::NegativeBitLength`] if `bits` is negative, or
/// [`ConfigurationError::NoPrimeForBitLength`] if every table entry is too small.
pub fn prime_for_bitlength(bits: i64) -> Result<BigUint, ConfigurationError> {
    if bits < 0 {
        return Err(ConfigurationError::NegativeBitLength(bits));
    }
    for &exp in MERSENNE_EXPONENTS.iter() {
        if i64::from(exp) > bits {
            return Ok((BigUint::one() << exp) - BigUint::one());
        }
    }
    Err(ConfigurationError::NoPrimeForBitLength(bits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 2)]
    #[case(2, 3)]
    #[case(6, 7)]
    #[case(106, 107)]
    #[case(107, 127)]
    fn picks_smallest_strictly_larger_exponent(#[case] bits: i64, #[case] expected_exp: u32) {
        let prime = prime_for_bitlength(bits).unwrap();
        assert_eq!(prime, (BigUint::one() << expected_exp) - BigUint::one());
    }

    #[test]
    fn rejects_negative_bitlength() {
        assert_eq!(prime_for_bitlength(-1), Err(ConfigurationError::NegativeBitLength(-1)));
    }

    #[test]
    fn rejects_bitlength_beyond_table() {
        assert_eq!(prime_for_bitlength(5000), Err(ConfigurationError::NoPrimeForBitLength(5000)));
    }

    #[test]
    fn boundary_is_strict() {
        // 4423 itself must not match; only something strictly bigger satisfies the last entry.
        assert_eq!(prime_for_bitlength(4423), Err(ConfigurationError::NoPrimeForBitLength(4423)));
        assert!(prime_for_bitlength(4422).is_ok());
    }
}
