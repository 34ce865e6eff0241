//! Szudzik elegant pairing of two nonnegative integers into one, and its inverse.

use crate::errors::DomainError;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

/// Combines two nonnegative integers into a single nonnegative integer from which both can be
/// recovered via [`elegant_unpair`].
///
/// # Errors
/// Returns [`DomainError::NegativeOperand`] if either operand is negative.
pub fn elegant_pair(x: &BigInt, y: &BigInt) -> Result<BigUint, DomainError> {
    if x.is_negative() || y.is_negative() {
        return Err(DomainError::NegativeOperand);
    }
    let (x, y) = (x.magnitude(), y.magnitude());
    if x < y { Ok(y * y + x) } else { Ok(x * x + x + y) }
}

/// Recovers the pair `(x, y)` that [`elegant_pair`] combined into `z`.
///
/// # Errors
/// Returns [`DomainError::NegativeOperand`] if `z` is negative.
pub fn elegant_unpair(z: &BigInt) -> Result<(BigUint, BigUint), DomainError> {
    if z.is_negative() {
        return Err(DomainError::NegativeOperand);
    }
    let z = z.magnitude();
    let r = isqrt(z);
    let d = z - &r * &r;
    if d < r { Ok((d, r)) } else { Ok((r.clone(), d - r)) }
}

/// Computes `floor(sqrt(n))` via integer Newton iteration.
///
/// Floating-point square roots lose precision on arbitrary-precision integers, so this computes
/// the floor square root exactly by iterating `x_{k+1} = (x_k + n / x_k) / 2` until it stops
/// decreasing, which happens exactly when `x_k^2 <= n < (x_k + 1)^2`.
pub fn isqrt(n: &BigUint) -> BigUint {
    if n.is_zero() {
        return BigUint::zero();
    }
    // A power-of-two upper bound gets Newton's method into its quadratically-converging regime
    // in a single step for most inputs.
    let mut x = BigUint::one() << n.bits().div_ceil(2);
    loop {
        let next = (&x + n / &x) >> 1u32;
        if next >= x {
            return x;
        }
        x = next;
    }
}
