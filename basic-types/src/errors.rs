//! Errors for identifier parsing.

use thiserror::Error;

/// A player id failed validation.
#[derive(Error, Debug)]
#[error("invalid player id: {0}")]
pub struct InvalidPlayerId(pub(crate) String);
