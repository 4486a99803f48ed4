//! Machine words the compression function is generic over.

use core::{
  fmt::Debug,
  ops::{BitXor, BitXorAssign},
};

/// An unsigned word of width 32 or 64 bits.
///
/// All arithmetic used by the compression function is modulo 2^W, so the trait
/// exposes wrapping operations only.
pub trait Word: Copy + Eq + Ord + Debug + BitXor<Output = Self> + BitXorAssign + Send + Sync + 'static {
  /// Width in bytes.
  const BYTES: usize;
  const ZERO: Self;
  const ONE: Self;
  /// All bits set; the value of the finalization flag.
  const MAX: Self;

  fn wrapping_add(self, rhs: Self) -> Self;

  fn rotate_right(self, n: u32) -> Self;

  /// Truncating conversion from a byte count.
  fn from_usize(n: usize) -> Self;

  /// Read a little-endian word. `bytes` must be exactly [`BYTES`](Self::BYTES) long.
  fn from_le_slice(bytes: &[u8]) -> Self;

  /// Write the word little-endian into `out`, which must be exactly
  /// [`BYTES`](Self::BYTES) long.
  fn write_le(self, out: &mut [u8]);
}

macro_rules! impl_word {
  ($($ty:ty),* $(,)?) => {$(
    impl Word for $ty {
      const BYTES: usize = core::mem::size_of::<$ty>();
      const ZERO: Self = 0;
      const ONE: Self = 1;
      const MAX: Self = <$ty>::MAX;

      #[inline(always)]
      fn wrapping_add(self, rhs: Self) -> Self {
        <$ty>::wrapping_add(self, rhs)
      }

      #[inline(always)]
      fn rotate_right(self, n: u32) -> Self {
        <$ty>::rotate_right(self, n)
      }

      #[inline(always)]
      fn from_usize(n: usize) -> Self {
        n as $ty
      }

      #[inline(always)]
      fn from_le_slice(bytes: &[u8]) -> Self {
        let mut le = [0u8; core::mem::size_of::<$ty>()];
        le.copy_from_slice(bytes);
        <$ty>::from_le_bytes(le)
      }

      #[inline(always)]
      fn write_le(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_le_bytes());
      }
    }
  )*};
}

impl_word!(u32, u64);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn little_endian_round_trip() {
    let w = <u32 as Word>::from_le_slice(&[0x01, 0x02, 0x03, 0x04]);
    assert_eq!(w, 0x0403_0201);

    let mut out = [0u8; 8];
    Word::write_le(0x0807_0605_0403_0201u64, &mut out);
    assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8]);
  }

  #[test]
  fn arithmetic_wraps() {
    assert_eq!(Word::wrapping_add(u32::MAX, 2u32), 1);
    assert_eq!(Word::wrapping_add(u64::MAX, 1u64), 0);
    assert_eq!(Word::rotate_right(1u32, 1), 0x8000_0000);
    assert_eq!(Word::rotate_right(1u64, 63), 2);
  }

  #[test]
  fn widths() {
    assert_eq!(<u32 as Word>::BYTES, 4);
    assert_eq!(<u64 as Word>::BYTES, 8);
  }
}
