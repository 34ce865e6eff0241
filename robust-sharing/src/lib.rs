//! Robust secret sharing: authenticated distribution and reconstruction of a secret bytestring
//! across named players, tolerant of up to `t - 1` corrupted, malformed, or colluding shares.
//!
//! Built on [`math_lib`]'s Shamir core and check-vector MAC; this crate owns the per-player
//! record shape, its textual serialization, and the voting protocol that makes reconstruction
//! robust against dishonest players.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::unimplemented,
    clippy::todo
)]

pub mod errors;
pub mod protocol;
pub mod record;

pub use protocol::{reconstruct_authenticated, reconstruct_unauthenticated, share_authenticated};
pub use record::RobustShareRecord;
