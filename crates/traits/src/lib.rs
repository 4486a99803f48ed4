//! Core hashing traits for the BLAKE2 engine.
//!
//! This crate provides the traits that the hash implementations conform to,
//! plus the error types they report. It is `no_std` compatible and has zero
//! dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Digest`] | Streaming hash with a single, terminal finalize | BLAKE2b-512, BLAKE2s-256 |
//! | [`KeyedDigest`] | Digest that also runs in keyed (MAC) mode | keyed BLAKE2 |
//!
//! # Error Types
//!
//! - [`KeyLengthError`] - Key longer than the algorithm accepts
//! - [`FinalizedError`] - Input or finalize requested after finalize
//! - [`VerificationError`] - Opaque error for MAC verification
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod ct;
mod digest;
pub mod error;
#[cfg(feature = "std")]
pub mod io;

pub use digest::{Digest, KeyedDigest};
pub use error::{FinalizedError, KeyLengthError, VerificationError};
