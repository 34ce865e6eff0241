//! Crate-wide error kinds.
//!
//! Each kind corresponds to one of the error taxonomy entries in the design: a parameter
//! violates a size/threshold invariant (`ConfigurationError`), the OS entropy source couldn't be
//! reached (`EntropyUnavailable`), a byte↔int decode found no sentinel (`ParseError`), or a
//! routine received a structurally invalid input such as a negative pairing operand or an empty
//! coefficient list (`DomainError`).

use thiserror::Error;

/// A parameter violates a size, threshold, or availability invariant.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum ConfigurationError {
    /// No Mersenne prime in the fixed table has strictly more bits than requested.
    #[error("no prime available for bit-length {0}")]
    NoPrimeForBitLength(i64),

    /// The requested bit-length is negative.
    #[error("bit-length must be nonnegative, got {0}")]
    NegativeBitLength(i64),

    /// The reconstruction threshold `t` is not in `1..=n`.
    #[error("reconstruction threshold {t} must satisfy 1 <= t <= {n}")]
    InvalidThreshold {
        /// The requested threshold.
        t: u64,
        /// The number of players.
        n: u64,
    },

    /// The secret integer is not strictly smaller than the sharing prime.
    #[error("secret is too large for the selected prime")]
    SecretTooLarge,

    /// The number of players is not strictly smaller than the sharing prime.
    #[error("too many players for the selected prime")]
    TooManyPlayers,

    /// The field is too small to hold the requested number of distinct samples.
    #[error("field of size {prime_bits} bits is too small to hold {requested} distinct values")]
    FieldTooSmall {
        /// The number of distinct values requested.
        requested: u64,
        /// The bit length of the field's prime, for diagnostic purposes.
        prime_bits: u64,
    },
}

/// The OS's cryptographically secure entropy source could not be reached.
#[derive(Error, Debug)]
#[error("OS entropy source unavailable: {0}")]
pub struct EntropyUnavailable(#[from] pub(crate) rand::Error);

/// A byte↔integer decode, or a serialized share, failed to parse.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The decoded bytes did not begin with the expected sentinel byte.
    #[error("missing sentinel byte; input is not a valid encoded bytestring")]
    MissingSentinel,
}

/// A routine received a structurally invalid input.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum DomainError {
    /// A pairing operand was negative.
    #[error("pairing operands must be nonnegative")]
    NegativeOperand,

    /// A polynomial routine was given no coefficients, or an interpolation no points.
    #[error("at least one coefficient or point is required")]
    EmptyInput,
}
