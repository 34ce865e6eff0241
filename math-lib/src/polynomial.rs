//! Polynomial evaluation and Lagrange interpolation at zero, modulo a prime.

use crate::errors::DomainError;
use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};

/// Evaluates `Σ coeffs[i] * x^i (mod p)` using modular exponentiation for each term.
///
/// `x` may be negative; it is normalized modulo `p` before evaluation.
///
/// # Errors
/// Returns [`DomainError::EmptyInput`] if `coeffs` is empty.
pub fn evaluate(coeffs: &[BigUint], x: &BigInt, p: &BigUint) -> Result<BigUint, DomainError> {
    if coeffs.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    let x = mod_normalize(x, p);
    let mut sum = BigUint::zero();
    for (i, coeff) in coeffs.iter().enumerate() {
        let term = x.modpow(&BigUint::from(i), p);
        sum = (sum + coeff * term) % p;
    }
    Ok(sum)
}

/// Given `k` points `(x_j, y_j)` with pairwise distinct `x_j`, returns the value at `x = 0` of
/// the unique polynomial of degree `< k` through them, via Lagrange interpolation.
///
/// Behavior is unspecified (but will not panic) if any two `x_j` coincide — callers that need
/// that guarantee (such as the Shamir core, whose abscissas are always `1..=n`) must ensure
/// distinctness themselves.
///
/// # Errors
/// Returns [`DomainError::EmptyInput`] if `points` is empty.
pub fn interpolate_at_zero(points: &[(BigUint, BigUint)], p: &BigUint) -> Result<BigUint, DomainError> {
    if points.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    let mut result = BigInt::zero();
    for (j, (xj, yj)) in points.iter().enumerate() {
        let mut numerator = BigInt::from(1);
        let mut denominator = BigInt::from(1);
        for (m, (xm, _)) in points.iter().enumerate() {
            if m == j {
                continue;
            }
            numerator *= -BigInt::from(xm.clone());
            denominator *= BigInt::from(xj.clone()) - BigInt::from(xm.clone());
        }
        let denominator_inv = mod_inverse(&denominator, p);
        let term = BigInt::from(yj.clone()) * numerator * denominator_inv;
        result += term;
    }
    Ok(mod_normalize(&result, p))
}

/// Normalizes a signed integer into `[0, p)`.
fn mod_normalize(value: &BigInt, p: &BigUint) -> BigUint {
    let p_signed = BigInt::from(p.clone());
    let reduced = ((value % &p_signed) + &p_signed) % &p_signed;
    // `reduced` is now in `[0, p)` and therefore nonnegative by construction.
    reduced.magnitude().clone()
}

/// Computes the modular inverse of `k` modulo `p` via the extended Euclidean algorithm.
///
/// `p` is assumed prime (or at least coprime to `k`), so this always produces a result; callers
/// in this crate never invoke it with a zero `k` modulo `p`.
fn mod_inverse(k: &BigInt, p: &BigUint) -> BigInt {
    let p_signed = BigInt::from(p.clone());
    let k = ((k % &p_signed) + &p_signed) % &p_signed;
    // extended_gcd(p, k) = (g, x, y) with p*x + k*y = g; y is k's inverse coefficient.
    let (_, _, y) = extended_gcd(&p_signed, &k);
    ((y % &p_signed) + &p_signed) % &p_signed
}

/// Extended Euclidean algorithm: returns `(g, x, y)` such that `a*x + b*y = g = gcd(a, b)`.
fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a.clone(), BigInt::from(1), BigInt::from(0));
    }
    let (g, x, y) = extended_gcd(b, &(a % b));
    let q = a / b;
    (g, y.clone(), x - &q * &y)
}
