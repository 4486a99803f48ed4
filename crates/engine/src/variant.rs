//! Width parameters for the two BLAKE2 instantiations.
//!
//! Everything that differs between BLAKE2b and BLAKE2s lives here; the
//! compression function and the streaming engine are written once against
//! [`Variant`].

use core::fmt::Debug;

use crate::word::Word;

/// Compile-time parameter set for one BLAKE2 width.
///
/// Byte arrays are carried as associated types because their lengths depend on
/// the word width.
pub trait Variant: Copy + Debug + Send + Sync + 'static {
  type Word: Word;
  /// `[u8; BLOCK_LEN]`
  type Block: Copy + AsRef<[u8]> + AsMut<[u8]> + Send + Sync;
  /// `[u8; 2 * BLOCK_LEN]`
  type Buffer: Copy + AsRef<[u8]> + AsMut<[u8]> + Send + Sync;
  /// `[u8; OUTPUT_LEN]`
  type Output: Copy + Eq + Debug + AsRef<[u8]> + AsMut<[u8]> + Send + Sync;

  /// Algorithm name, used in `Debug` output.
  const NAME: &'static str;
  const ROUNDS: usize;
  const BLOCK_LEN: usize;
  const OUTPUT_LEN: usize;
  const KEY_LEN: usize;
  const IV: [Self::Word; 8];
  /// G rotation amounts (R1, R2, R3, R4).
  const ROTATIONS: [u32; 4];

  const ZERO_BLOCK: Self::Block;
  const ZERO_BUFFER: Self::Buffer;
  const ZERO_OUTPUT: Self::Output;
}

/// BLAKE2b: 64-bit words, 12 rounds, 128-byte blocks, 64-byte digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blake2bParams {}

/// BLAKE2s: 32-bit words, 10 rounds, 64-byte blocks, 32-byte digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blake2sParams {}

impl Variant for Blake2bParams {
  type Word = u64;
  type Block = [u8; 128];
  type Buffer = [u8; 256];
  type Output = [u8; 64];

  const NAME: &'static str = "Blake2b512";
  const ROUNDS: usize = 12;
  const BLOCK_LEN: usize = 128;
  const OUTPUT_LEN: usize = 64;
  const KEY_LEN: usize = 64;
  const IV: [u64; 8] = [
    0x6a09_e667_f3bc_c908,
    0xbb67_ae85_84ca_a73b,
    0x3c6e_f372_fe94_f82b,
    0xa54f_f53a_5f1d_36f1,
    0x510e_527f_ade6_82d1,
    0x9b05_688c_2b3e_6c1f,
    0x1f83_d9ab_fb41_bd6b,
    0x5be0_cd19_137e_2179,
  ];
  const ROTATIONS: [u32; 4] = [32, 24, 16, 63];

  const ZERO_BLOCK: [u8; 128] = [0u8; 128];
  const ZERO_BUFFER: [u8; 256] = [0u8; 256];
  const ZERO_OUTPUT: [u8; 64] = [0u8; 64];
}

impl Variant for Blake2sParams {
  type Word = u32;
  type Block = [u8; 64];
  type Buffer = [u8; 128];
  type Output = [u8; 32];

  const NAME: &'static str = "Blake2s256";
  const ROUNDS: usize = 10;
  const BLOCK_LEN: usize = 64;
  const OUTPUT_LEN: usize = 32;
  const KEY_LEN: usize = 32;
  const IV: [u32; 8] = [
    0x6A09_E667,
    0xBB67_AE85,
    0x3C6E_F372,
    0xA54F_F53A,
    0x510E_527F,
    0x9B05_688C,
    0x1F83_D9AB,
    0x5BE0_CD19,
  ];
  const ROTATIONS: [u32; 4] = [16, 12, 8, 7];

  const ZERO_BLOCK: [u8; 64] = [0u8; 64];
  const ZERO_BUFFER: [u8; 128] = [0u8; 128];
  const ZERO_OUTPUT: [u8; 32] = [0u8; 32];
}
