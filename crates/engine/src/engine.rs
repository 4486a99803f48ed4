//! Streaming BLAKE2 state machine shared by both widths.

#![allow(clippy::indexing_slicing)] // Buffer offsets are bounded by `2 * BLOCK_LEN`

use core::fmt;

use traits::{Digest, FinalizedError, KeyLengthError, KeyedDigest};

use crate::{compress::compress, variant::Variant, word::Word};

/// BLAKE2 hasher generic over the word width.
///
/// Use the [`Blake2b512`](crate::Blake2b512) and
/// [`Blake2s256`](crate::Blake2s256) aliases rather than naming this directly.
///
/// Input is buffered in a two-block window: a completed block is only
/// compressed once input beyond it arrives, so the last block always reaches
/// [`finalize`](Self::finalize) uncompressed and can be flagged as final.
#[derive(Clone)]
pub struct Blake2<V: Variant> {
  h: [V::Word; 8],
  /// Byte counter, low word first.
  t: [V::Word; 2],
  /// Finalization flags; `f[0]` is all ones once finalized.
  f: [V::Word; 2],
  buf: V::Buffer,
  buf_len: usize,
  /// Zero-padded key block, absorbed on every (re)initialization.
  key: V::Block,
  key_len: usize,
  #[cfg(test)]
  compressions: Compressions,
}

#[cfg(test)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Compressions {
  pub(crate) intermediate: usize,
  pub(crate) last: usize,
}

impl<V: Variant> Blake2<V> {
  /// Digest size in bytes.
  pub const OUTPUT_SIZE: usize = V::OUTPUT_LEN;
  /// Block size in bytes.
  pub const BLOCK_SIZE: usize = V::BLOCK_LEN;
  /// Maximum key size in bytes.
  pub const KEY_SIZE: usize = V::KEY_LEN;

  /// Create an unkeyed hasher.
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    let mut state = Self::blank(V::ZERO_BLOCK, 0);
    state.init();
    state
  }

  /// Create a hasher keyed with `key` (MAC mode).
  ///
  /// An empty key is the same as [`new`](Self::new).
  ///
  /// # Errors
  ///
  /// Returns [`KeyLengthError`] if `key` is longer than
  /// [`KEY_SIZE`](Self::KEY_SIZE) bytes.
  pub fn new_keyed(key: &[u8]) -> Result<Self, KeyLengthError> {
    let key_block = Self::key_block(key)?;
    let mut state = Self::blank(key_block, key.len());
    state.init();
    Ok(state)
  }

  /// Compute the unkeyed digest of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn digest(data: &[u8]) -> V::Output {
    let mut state = Self::new();
    state.absorb(data);
    state.finish()
  }

  /// Compute the keyed digest of `data` in one shot.
  ///
  /// # Errors
  ///
  /// Returns [`KeyLengthError`] if `key` is too long.
  #[inline]
  pub fn digest_keyed(key: &[u8], data: &[u8]) -> Result<V::Output, KeyLengthError> {
    let mut state = Self::new_keyed(key)?;
    state.absorb(data);
    Ok(state.finish())
  }

  /// Feed `data` into the hasher.
  ///
  /// # Errors
  ///
  /// Returns [`FinalizedError`] if [`finalize`](Self::finalize) already ran.
  /// Nothing is absorbed in that case.
  #[inline]
  pub fn update(&mut self, data: &[u8]) -> Result<(), FinalizedError> {
    self.ensure_live()?;
    self.absorb(data);
    Ok(())
  }

  /// Produce the digest. The hasher is terminal afterwards.
  ///
  /// # Errors
  ///
  /// Returns [`FinalizedError`] on a second call without an intervening
  /// [`reset`](Self::reset).
  #[inline]
  pub fn finalize(&mut self) -> Result<V::Output, FinalizedError> {
    self.ensure_live()?;
    Ok(self.finish())
  }

  /// Restore the initial state, keeping the key.
  #[inline]
  pub fn reset(&mut self) {
    self.init();
  }

  /// Replace the key and restore the initial state.
  ///
  /// # Errors
  ///
  /// Returns [`KeyLengthError`] if `key` is too long; the hasher is left as
  /// it was.
  pub fn rekey(&mut self, key: &[u8]) -> Result<(), KeyLengthError> {
    self.key = Self::key_block(key)?;
    self.key_len = key.len();
    self.init();
    Ok(())
  }

  /// Whether the hasher is terminal.
  #[inline]
  #[must_use]
  pub fn is_finalized(&self) -> bool {
    self.f[0] != <V::Word as Word>::ZERO
  }

  /// Whether the hasher runs in keyed mode.
  #[inline]
  #[must_use]
  pub fn is_keyed(&self) -> bool {
    self.key_len != 0
  }

  /// Block size in bytes.
  #[inline]
  #[must_use]
  pub const fn block_size(&self) -> usize {
    V::BLOCK_LEN
  }

  /// Digest size in bytes.
  #[inline]
  #[must_use]
  pub const fn output_size(&self) -> usize {
    V::OUTPUT_LEN
  }

  fn blank(key: V::Block, key_len: usize) -> Self {
    let zero = <V::Word as Word>::ZERO;
    Self {
      h: V::IV,
      t: [zero; 2],
      f: [zero; 2],
      buf: V::ZERO_BUFFER,
      buf_len: 0,
      key,
      key_len,
      #[cfg(test)]
      compressions: Compressions::default(),
    }
  }

  fn key_block(key: &[u8]) -> Result<V::Block, KeyLengthError> {
    if key.len() > V::KEY_LEN {
      return Err(KeyLengthError::new(key.len(), V::KEY_LEN));
    }
    let mut block = V::ZERO_BLOCK;
    block.as_mut()[..key.len()].copy_from_slice(key);
    Ok(block)
  }

  /// Parameter block → `h`, clear counters and buffer, absorb the key block.
  fn init(&mut self) {
    // Parameter block: digest length, key length, fanout = 1, depth = 1.
    let mut param = V::ZERO_BLOCK;
    param.as_mut()[..4].copy_from_slice(&[V::OUTPUT_LEN as u8, self.key_len as u8, 1, 1]);

    let words = param.as_ref().chunks_exact(<V::Word as Word>::BYTES);
    for ((h, iv), p) in self.h.iter_mut().zip(V::IV).zip(words) {
      *h = iv ^ <V::Word as Word>::from_le_slice(p);
    }

    let zero = <V::Word as Word>::ZERO;
    self.t = [zero; 2];
    self.f = [zero; 2];
    self.buf = V::ZERO_BUFFER;
    self.buf_len = 0;
    #[cfg(test)]
    {
      self.compressions = Compressions::default();
    }

    if self.key_len > 0 {
      let key = self.key;
      self.absorb(key.as_ref());
    }
  }

  #[inline]
  fn ensure_live(&self) -> Result<(), FinalizedError> {
    if self.is_finalized() { Err(FinalizedError::new()) } else { Ok(()) }
  }

  fn absorb(&mut self, mut data: &[u8]) {
    let block = V::BLOCK_LEN;
    while !data.is_empty() {
      let free = 2 * block - self.buf_len;
      if data.len() > free {
        let (head, rest) = data.split_at(free);
        self.buf.as_mut()[self.buf_len..].copy_from_slice(head);
        self.buf_len += free;
        // More input follows, so the front block cannot be the last one.
        self.compress_front(block);
        data = rest;
      } else {
        self.buf.as_mut()[self.buf_len..self.buf_len + data.len()].copy_from_slice(data);
        self.buf_len += data.len();
        data = &[];
      }
    }
  }

  /// Compress the first buffered block as non-final and slide the rest down.
  fn compress_front(&mut self, block: usize) {
    self.increment_counter(block);
    compress::<V>(&mut self.h, &self.buf.as_ref()[..block], self.t, self.f);
    #[cfg(test)]
    {
      self.compressions.intermediate += 1;
    }
    self.buf.as_mut().copy_within(block..self.buf_len, 0);
    self.buf_len -= block;
  }

  fn finish(&mut self) -> V::Output {
    let block = V::BLOCK_LEN;
    if self.buf_len > block {
      self.compress_front(block);
    }

    self.increment_counter(self.buf_len);
    self.f[0] = <V::Word as Word>::MAX;
    self.buf.as_mut()[self.buf_len..block].fill(0);
    compress::<V>(&mut self.h, &self.buf.as_ref()[..block], self.t, self.f);
    #[cfg(test)]
    {
      self.compressions.last += 1;
    }

    let mut out = V::ZERO_OUTPUT;
    for (bytes, word) in out.as_mut().chunks_exact_mut(<V::Word as Word>::BYTES).zip(self.h) {
      word.write_le(bytes);
    }
    out
  }

  /// Add `n` bytes to the double-word counter, carrying into the high word.
  #[inline]
  fn increment_counter(&mut self, n: usize) {
    let n = <V::Word as Word>::from_usize(n);
    self.t[0] = self.t[0].wrapping_add(n);
    if self.t[0] < n {
      self.t[1] = self.t[1].wrapping_add(<V::Word as Word>::ONE);
    }
  }

  #[cfg(test)]
  pub(crate) fn compressions(&self) -> Compressions {
    self.compressions
  }
}

impl<V: Variant> Default for Blake2<V> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<V: Variant> fmt::Debug for Blake2<V> {
  // Key material and buffered input stay out of debug output.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct(V::NAME)
      .field("counter", &self.t)
      .field("buffered", &self.buf_len)
      .field("keyed", &self.is_keyed())
      .field("finalized", &self.is_finalized())
      .finish_non_exhaustive()
  }
}

impl<V: Variant> Digest for Blake2<V> {
  const OUTPUT_SIZE: usize = V::OUTPUT_LEN;
  const BLOCK_SIZE: usize = V::BLOCK_LEN;
  type Output = V::Output;

  #[inline]
  fn new() -> Self {
    Blake2::new()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) -> Result<(), FinalizedError> {
    Blake2::update(self, data)
  }

  #[inline]
  fn finalize(&mut self) -> Result<Self::Output, FinalizedError> {
    Blake2::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Blake2::reset(self);
  }

  #[inline]
  fn is_finalized(&self) -> bool {
    Blake2::is_finalized(self)
  }

  #[inline]
  fn digest(data: &[u8]) -> Self::Output {
    Blake2::<V>::digest(data)
  }
}

impl<V: Variant> KeyedDigest for Blake2<V> {
  const KEY_SIZE: usize = V::KEY_LEN;

  #[inline]
  fn new_keyed(key: &[u8]) -> Result<Self, KeyLengthError> {
    Blake2::new_keyed(key)
  }

  #[inline]
  fn rekey(&mut self, key: &[u8]) -> Result<(), KeyLengthError> {
    Blake2::rekey(self, key)
  }
}
