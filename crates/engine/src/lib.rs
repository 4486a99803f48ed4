//! BLAKE2b-512 and BLAKE2s-256 (RFC 7693), with keyed mode.
//!
//! Portable, `no_std`, pure Rust. Both widths are one engine, [`Blake2`],
//! instantiated with a [`Variant`] parameter set:
//!
//! | Type | Word | Rounds | Block | Digest | Max key |
//! |------|------|--------|-------|--------|---------|
//! | [`Blake2b512`] | 64-bit | 12 | 128 | 64 | 64 |
//! | [`Blake2s256`] | 32-bit | 10 | 64 | 32 | 32 |
//!
//! # Example
//!
//! ```
//! use blake2_engine::{Blake2b512, Blake2s256};
//!
//! // One-shot
//! let digest = Blake2s256::digest(b"abc");
//! assert_eq!(digest[..4], [0x50, 0x8c, 0x5e, 0x8c]);
//!
//! // Streaming, keyed
//! let mut mac = Blake2b512::new_keyed(b"secret key")?;
//! mac.update(b"hello ")?;
//! mac.update(b"world")?;
//! let tag = mac.finalize()?;
//! assert_eq!(tag, Blake2b512::digest_keyed(b"secret key", b"hello world")?);
//!
//! // Finalize is terminal until reset.
//! assert!(mac.update(b"!").is_err());
//! mac.reset();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io::Write` support and [`DigestWriter`](traits::io::DigestWriter) |
//! | `alloc` | Yes | [`Digest::sum`] (implied by `std`) |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod compress;
mod engine;
#[cfg(feature = "std")]
pub mod io;
pub mod variant;
pub mod word;

pub use engine::Blake2;
pub use traits::{Digest, FinalizedError, KeyLengthError, KeyedDigest, VerificationError};
pub use variant::{Blake2bParams, Blake2sParams, Variant};
pub use word::Word;

/// BLAKE2b with a 64-byte digest.
pub type Blake2b512 = Blake2<Blake2bParams>;

/// BLAKE2s with a 32-byte digest.
pub type Blake2s256 = Blake2<Blake2sParams>;
