//! Bijective encoding between byte sequences and nonnegative integers.
//!
//! Encoding prepends a fixed nonzero sentinel byte to the input before interpreting the result
//! as an unsigned big-endian integer. Because the sentinel is nonzero, it is never dropped by
//! big-endian normalization, which is what lets the encoding preserve leading zero bytes in the
//! original bytestring: `int_of_bytes(b)` never has fewer significant bytes than `b.len() + 1`.

use crate::errors::ParseError;
use num_bigint::BigUint;

/// The fixed sentinel byte prepended before encoding, and checked for on decode.
pub const SENTINEL: u8 = 0x2A;

/// Encodes a byte sequence as a nonnegative integer, preserving leading zero bytes.
///
/// This never fails: any byte sequence, including the empty one, has a well-defined encoding.
pub fn int_of_bytes(bytes: &[u8]) -> BigUint {
    let mut buf = Vec::with_capacity(bytes.len() + 1);
    buf.push(SENTINEL);
    buf.extend_from_slice(bytes);
    BigUint::from_bytes_be(&buf)
}

/// Decodes an integer produced by [`int_of_bytes`] back into its original byte sequence.
///
/// # Errors
/// Returns [`ParseError::MissingSentinel`] if the leading byte of the big-endian representation
/// of `value` is not [`SENTINEL`] — this is the tamper-detection check: a large numeric
/// perturbation destroys the sentinel with overwhelming probability.
pub fn bytes_of_int(value: &BigUint) -> Result<Vec<u8>, ParseError> {
    let bytes = value.to_bytes_be();
    match bytes.split_first() {
        Some((&SENTINEL, rest)) => Ok(rest.to_vec()),
        _ => Err(ParseError::MissingSentinel),
    }
}
