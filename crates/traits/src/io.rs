//! I/O adapter for digests.
//!
//! [`DigestWriter`] wraps a [`std::io::Write`] implementation and feeds every
//! byte the inner writer accepts into a [`Digest`](crate::Digest).
//!
//! # Example
//!
//! ```
//! use std::io::Write;
//!
//! use traits::{Digest, FinalizedError};
//!
//! # #[derive(Clone, Default)]
//! # struct Xor(u8, bool);
//! # impl Digest for Xor {
//! #   const OUTPUT_SIZE: usize = 1;
//! #   const BLOCK_SIZE: usize = 1;
//! #   type Output = [u8; 1];
//! #   fn new() -> Self { Self::default() }
//! #   fn update(&mut self, data: &[u8]) -> Result<(), FinalizedError> {
//! #     if self.1 { return Err(FinalizedError::new()); }
//! #     self.0 = data.iter().fold(self.0, |acc, b| acc ^ b);
//! #     Ok(())
//! #   }
//! #   fn finalize(&mut self) -> Result<[u8; 1], FinalizedError> {
//! #     if self.1 { return Err(FinalizedError::new()); }
//! #     self.1 = true;
//! #     Ok([self.0])
//! #   }
//! #   fn reset(&mut self) { *self = Self::default(); }
//! #   fn is_finalized(&self) -> bool { self.1 }
//! #   fn digest(data: &[u8]) -> [u8; 1] { [data.iter().fold(0, |acc, b| acc ^ b)] }
//! # }
//! let mut writer = Xor::writer(Vec::new());
//! writer.write_all(b"hello world")?;
//! let (out, digest) = writer.into_parts()?;
//! assert_eq!(out, b"hello world");
//! assert_eq!(digest, Xor::digest(b"hello world"));
//! # Ok::<(), std::io::Error>(())
//! ```

use crate::{Digest, error::FinalizedError};

/// A writer that computes a digest of everything written through it.
///
/// Only bytes actually accepted by the inner writer are hashed, so short
/// writes are handled correctly.
#[derive(Clone, Debug)]
pub struct DigestWriter<W, D: Digest> {
  inner: W,
  hasher: D,
}

impl<W, D: Digest> DigestWriter<W, D> {
  /// Create a new writer wrapper around a fresh unkeyed hasher.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self::with_hasher(inner, D::new())
  }

  /// Create a new writer wrapper around an existing hasher, e.g. a keyed one.
  #[inline]
  #[must_use]
  pub fn with_hasher(inner: W, hasher: D) -> Self {
    Self { inner, hasher }
  }

  /// Get a reference to the underlying hasher.
  #[inline]
  pub fn hasher(&self) -> &D {
    &self.hasher
  }

  /// Unwrap this `DigestWriter`, returning the inner writer and the final digest.
  ///
  /// # Errors
  ///
  /// Returns [`FinalizedError`] if the hasher was finalized through
  /// [`hasher_mut`](Self::hasher_mut) beforehand.
  #[inline]
  pub fn into_parts(mut self) -> Result<(W, D::Output), FinalizedError> {
    let digest = self.hasher.finalize()?;
    Ok((self.inner, digest))
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut D {
    &mut self.hasher
  }

  /// Unwrap this `DigestWriter`, returning the inner writer and discarding the digest.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }
}

impl<W: std::io::Write, D: Digest> std::io::Write for DigestWriter<W, D> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    // Refuse before touching the inner writer so both sides stay in step.
    if self.hasher.is_finalized() {
      return Err(FinalizedError::new().into());
    }
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data)?;
    }
    Ok(n)
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }
}

#[cfg(test)]
mod tests {
  use std::{
    io::{self, Write},
    vec::Vec,
  };

  use super::*;

  /// Byte-sum digest with the same terminal-state contract as the real ones.
  #[derive(Clone, Debug, Default)]
  struct SumDigest {
    sum: u8,
    done: bool,
  }

  impl Digest for SumDigest {
    const OUTPUT_SIZE: usize = 1;
    const BLOCK_SIZE: usize = 1;
    type Output = [u8; 1];

    fn new() -> Self {
      Self::default()
    }

    fn update(&mut self, data: &[u8]) -> Result<(), FinalizedError> {
      if self.done {
        return Err(FinalizedError::new());
      }
      self.sum = data.iter().fold(self.sum, |acc, &b| acc.wrapping_add(b));
      Ok(())
    }

    fn finalize(&mut self) -> Result<Self::Output, FinalizedError> {
      if self.done {
        return Err(FinalizedError::new());
      }
      self.done = true;
      Ok([self.sum])
    }

    fn reset(&mut self) {
      *self = Self::default();
    }

    fn is_finalized(&self) -> bool {
      self.done
    }

    fn digest(data: &[u8]) -> Self::Output {
      [data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))]
    }
  }

  /// Accepts at most `limit` bytes per call.
  struct ShortWriter {
    out: Vec<u8>,
    limit: usize,
  }

  impl Write for ShortWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      let n = buf.len().min(self.limit);
      self.out.extend_from_slice(&buf[..n]);
      Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn hashes_everything_written() {
    let mut writer = SumDigest::writer(Vec::new());
    writer.write_all(b"hello world").unwrap();
    let (out, digest) = writer.into_parts().unwrap();
    assert_eq!(out, b"hello world".to_vec());
    assert_eq!(digest, SumDigest::digest(b"hello world"));
  }

  #[test]
  fn short_writes_hash_only_accepted_bytes() {
    let mut writer = DigestWriter::<_, SumDigest>::new(ShortWriter { out: Vec::new(), limit: 3 });
    assert_eq!(writer.write(b"abcdef").unwrap(), 3);
    assert_eq!(writer.inner().out, b"abc".to_vec());
    let (_, digest) = writer.into_parts().unwrap();
    assert_eq!(digest, SumDigest::digest(b"abc"));
  }

  #[test]
  fn finalized_hasher_rejects_writes() {
    let mut writer = SumDigest::writer(Vec::new());
    writer.write_all(b"abc").unwrap();
    writer.hasher_mut().finalize().unwrap();

    let err = writer.write(b"more").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
    assert_eq!(writer.inner(), &b"abc".to_vec());
    assert!(writer.into_parts().is_err());
  }
}
