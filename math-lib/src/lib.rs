//! Arbitrary-precision cryptographic substrate for robust secret sharing.
//!
//! Everything in this crate operates on plain integers (`num_bigint::BigUint`/`BigInt`); it has
//! no notion of a "player" or any serialization format. The `robust-sharing` crate builds the
//! player-facing protocol on top of the primitives exposed here.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::iterator_step_by_zero,
    clippy::unimplemented,
    clippy::todo
)]

pub mod codec;
pub mod csprng;
pub mod errors;
pub mod mac;
pub mod pairing;
pub mod polynomial;
pub mod primes;
pub mod shamir;
