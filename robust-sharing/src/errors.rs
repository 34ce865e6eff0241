//! Errors for record (de)serialization and the three top-level operations.

use math_lib::errors::{ConfigurationError, DomainError, ParseError};
use math_lib::mac::MacError;
use math_lib::shamir::{ReconstructError, ShareError};
use thiserror::Error;

/// A serialized share record failed to parse or did not have the expected shape.
#[derive(Error, Debug)]
pub enum RecordParseError {
    /// The input was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value was not an object.
    #[error("record is not a JSON object")]
    Malformed,

    /// A required field was absent.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A field that must hold a decimal integer string did not.
    #[error("field `{0}` is not a decimal integer string")]
    InvalidInteger(String),

    /// A tag was not a two-element array of decimal integer strings.
    #[error("tag is not a two-element array of decimal integer strings")]
    MalformedTag,

    /// A map key was not a valid player id.
    #[error(transparent)]
    InvalidPlayerId(#[from] basic_types::InvalidPlayerId),
}

/// Failure of [`crate::protocol::share_authenticated`].
#[derive(Error, Debug)]
pub enum ShareAuthenticatedError {
    /// The sharing parameters violated a sizing invariant, or sampling failed.
    #[error(transparent)]
    Share(#[from] ShareError),

    /// Packing an evaluation point into a share integer failed.
    #[error(transparent)]
    Pairing(#[from] DomainError),

    /// Generating the check-vector batch for a holder failed.
    #[error(transparent)]
    Mac(#[from] MacError),

    /// Serializing an assembled record failed; unreachable in practice since every value
    /// passed to the encoder here is a plain string, object, or array.
    #[error(transparent)]
    Serialization(#[from] RecordParseError),
}

/// The reconstruction protocol could not authorize a secret.
///
/// Distinct from a wrapper error: this is a protocol-level outcome ("the adversary exceeded
/// the tolerance this call was configured for"), not a propagated bug.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum ReconstructionFailure {
    /// Fewer than `t` players submitted structurally valid records.
    #[error("fewer than the threshold of structurally valid shares were submitted")]
    InsufficientValidShares,

    /// No candidate secret was supported by at least `t` verifiers.
    #[error("no candidate secret was authorized by enough verifiers")]
    NoAuthorizedSecret,

    /// More than one candidate secret was each supported by at least `t` verifiers.
    #[error("more than one candidate secret was authorized")]
    AmbiguousAuthorizedSecrets,
}

/// Failure of [`crate::protocol::reconstruct_authenticated`].
#[derive(Error, Debug)]
pub enum ReconstructAuthenticatedError {
    /// The reconstruction parameters violated a sizing invariant.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The voting protocol did not authorize a unique secret.
    #[error(transparent)]
    Failure(#[from] ReconstructionFailure),
}

/// Failure of [`crate::protocol::reconstruct_unauthenticated`].
#[derive(Error, Debug)]
pub enum ReconstructUnauthenticatedError {
    /// The reconstruction parameters were invalid, or no points were submitted to interpolate.
    #[error(transparent)]
    Reconstruct(#[from] ReconstructError),

    /// The reconstructed integer did not decode back to a sentinel-prefixed byte string.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
