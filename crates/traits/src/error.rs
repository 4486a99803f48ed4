//! Error types for hashing operations.
//!
//! Small `Copy` errors: one for rejected configuration, one for misuse of a
//! finalized hasher, and an opaque one for failed MAC verification.

use core::fmt;

/// Key longer than the algorithm accepts.
///
/// Raised when a keyed hasher is created or rekeyed. Oversized keys are never
/// truncated.
///
/// # Examples
///
/// ```
/// use traits::KeyLengthError;
///
/// let err = KeyLengthError::new(65, 64);
/// assert_eq!(err.key_len(), 65);
/// assert_eq!(err.max_len(), 64);
/// assert_eq!(err.to_string(), "key length 65 exceeds maximum of 64 bytes");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct KeyLengthError {
  len: usize,
  max: usize,
}

impl KeyLengthError {
  /// Create a new key length error for a key of `len` bytes against a
  /// maximum of `max`.
  #[inline]
  #[must_use]
  pub const fn new(len: usize, max: usize) -> Self {
    Self { len, max }
  }

  /// Length of the rejected key.
  #[inline]
  #[must_use]
  pub const fn key_len(&self) -> usize {
    self.len
  }

  /// Maximum key length accepted by the algorithm.
  #[inline]
  #[must_use]
  pub const fn max_len(&self) -> usize {
    self.max
  }
}

impl fmt::Display for KeyLengthError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "key length {} exceeds maximum of {} bytes", self.len, self.max)
  }
}

impl core::error::Error for KeyLengthError {}

/// The hasher has already been finalized.
///
/// Returned by `update` and `finalize` on a terminal hasher. The hasher state
/// is left untouched; `reset` makes it usable again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct FinalizedError;

impl FinalizedError {
  /// Create a new finalized-state error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for FinalizedError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for FinalizedError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("hasher already finalized")
  }
}

impl core::error::Error for FinalizedError {}

#[cfg(feature = "std")]
impl From<FinalizedError> for std::io::Error {
  #[inline]
  fn from(err: FinalizedError) -> Self {
    std::io::Error::other(err)
  }
}

/// Verification failed.
///
/// Returned when a MAC tag does not match. Intentionally opaque to prevent
/// timing side-channels.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn verify(computed: &[u8; 32], expected: &[u8; 32]) -> Result<(), VerificationError> {
///   if traits::ct::eq(computed, expected) {
///     Ok(())
///   } else {
///     Err(VerificationError::new())
///   }
/// }
///
/// let a = [0u8; 32];
/// let b = [1u8; 32];
/// assert!(verify(&a, &b).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("verification failed")
  }
}

impl core::error::Error for VerificationError {}
