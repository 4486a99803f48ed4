//! Cryptographic digest traits.
//!
//! A [`Digest`] accepts input through repeated [`update`](Digest::update) calls
//! and produces its output exactly once. After [`finalize`](Digest::finalize)
//! the hasher is terminal: further input or finalize calls are rejected with
//! [`FinalizedError`] until [`reset`](Digest::reset) is called.

use core::fmt::Debug;

use crate::error::{FinalizedError, KeyLengthError, VerificationError};

/// Cryptographic hash function producing a fixed-size digest.
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as a freshly reset unkeyed hasher
/// - a failed call must leave the hasher state unchanged
/// - `reset()` must restore the hasher to its initial state, including any key
pub trait Digest: Clone {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Size of one compression block in bytes.
  const BLOCK_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug + AsRef<[u8]>;

  /// Create a new unkeyed hasher in its initial state.
  #[must_use]
  fn new() -> Self;

  /// Update the hasher with additional data.
  ///
  /// # Errors
  ///
  /// Returns [`FinalizedError`] if the hasher has already been finalized.
  fn update(&mut self, data: &[u8]) -> Result<(), FinalizedError>;

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// # Errors
  ///
  /// Returns [`FinalizedError`] if the hasher has already been finalized.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) -> Result<(), FinalizedError> {
    for buf in bufs {
      self.update(buf)?;
    }
    Ok(())
  }

  /// Finalize and return the digest.
  ///
  /// The hasher becomes terminal; call [`reset`](Self::reset) to reuse it.
  ///
  /// # Errors
  ///
  /// Returns [`FinalizedError`] if the hasher has already been finalized.
  fn finalize(&mut self) -> Result<Self::Output, FinalizedError>;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Whether [`finalize`](Self::finalize) has already run.
  #[must_use]
  fn is_finalized(&self) -> bool;

  /// Compute the digest of data in one shot.
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output;

  /// Block size in bytes.
  #[inline]
  #[must_use]
  fn block_size(&self) -> usize {
    Self::BLOCK_SIZE
  }

  /// Output size in bytes.
  #[inline]
  #[must_use]
  fn output_size(&self) -> usize {
    Self::OUTPUT_SIZE
  }

  /// Finalize and append the digest to `prefix`.
  ///
  /// # Errors
  ///
  /// Returns [`FinalizedError`] if the hasher has already been finalized;
  /// `prefix` is dropped in that case.
  #[cfg(feature = "alloc")]
  #[inline]
  fn sum(&mut self, mut prefix: alloc::vec::Vec<u8>) -> Result<alloc::vec::Vec<u8>, FinalizedError> {
    let out = self.finalize()?;
    prefix.extend_from_slice(out.as_ref());
    Ok(prefix)
  }

  /// Wrap a writer to compute the digest of everything written through it.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::DigestWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::DigestWriter::new(inner)
  }
}

/// A [`Digest`] that can also run in keyed mode, turning it into a MAC.
pub trait KeyedDigest: Digest {
  /// Maximum key length in bytes.
  const KEY_SIZE: usize;

  /// Create a hasher keyed with `key`.
  ///
  /// An empty key produces the unkeyed hasher.
  ///
  /// # Errors
  ///
  /// Returns [`KeyLengthError`] if `key` is longer than [`KEY_SIZE`](Self::KEY_SIZE).
  fn new_keyed(key: &[u8]) -> Result<Self, KeyLengthError>;

  /// Replace the key and reset the hasher.
  ///
  /// # Errors
  ///
  /// Returns [`KeyLengthError`] if `key` is too long; the hasher is unchanged.
  fn rekey(&mut self, key: &[u8]) -> Result<(), KeyLengthError>;

  /// Finalize and compare the digest against `tag` in constant time.
  ///
  /// # Errors
  ///
  /// Returns [`VerificationError`] if the tags differ, if `tag` has the wrong
  /// length, or if the hasher was already finalized.
  #[inline]
  fn verify(mut self, tag: &[u8]) -> Result<(), VerificationError>
  where
    Self: Sized,
  {
    let out = self.finalize().map_err(|_| VerificationError::new())?;
    if crate::ct::eq(out.as_ref(), tag) {
      Ok(())
    } else {
      Err(VerificationError::new())
    }
  }
}
