//! The BLAKE2 compression function F (RFC 7693 §3.2), generic over width.

#![allow(clippy::indexing_slicing)] // Compression schedule uses fixed indices

use crate::{variant::Variant, word::Word};

/// Message word permutations. BLAKE2s uses rows 0..10; BLAKE2b runs two more
/// rounds that repeat rows 0 and 1.
const SIGMA: [[usize; 16]; 12] = [
  [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
  [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
  [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
  [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
  [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
  [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
  [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
  [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
  [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
  [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
  [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
  [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
];

#[inline(always)]
#[allow(clippy::too_many_arguments)]
fn g<W: Word>(v: &mut [W; 16], a: usize, b: usize, c: usize, d: usize, x: W, y: W, rot: [u32; 4]) {
  v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
  v[d] = (v[d] ^ v[a]).rotate_right(rot[0]);
  v[c] = v[c].wrapping_add(v[d]);
  v[b] = (v[b] ^ v[c]).rotate_right(rot[1]);
  v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
  v[d] = (v[d] ^ v[a]).rotate_right(rot[2]);
  v[c] = v[c].wrapping_add(v[d]);
  v[b] = (v[b] ^ v[c]).rotate_right(rot[3]);
}

/// Mix one `BLOCK_LEN`-byte block into the chaining value `h`.
///
/// `t` is the byte counter (low word first) including this block, `f` the
/// finalization flags.
#[inline]
pub(crate) fn compress<V: Variant>(h: &mut [V::Word; 8], block: &[u8], t: [V::Word; 2], f: [V::Word; 2]) {
  debug_assert_eq!(block.len(), V::BLOCK_LEN);

  let mut m = [<V::Word as Word>::ZERO; 16];
  for (word, bytes) in m.iter_mut().zip(block.chunks_exact(<V::Word as Word>::BYTES)) {
    *word = <V::Word as Word>::from_le_slice(bytes);
  }

  let iv = V::IV;
  let mut v = [
    h[0],
    h[1],
    h[2],
    h[3],
    h[4],
    h[5],
    h[6],
    h[7],
    iv[0],
    iv[1],
    iv[2],
    iv[3],
    iv[4] ^ t[0],
    iv[5] ^ t[1],
    iv[6] ^ f[0],
    iv[7] ^ f[1],
  ];

  let rot = V::ROTATIONS;
  for s in SIGMA.iter().take(V::ROUNDS) {
    g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]], rot);
    g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]], rot);
    g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]], rot);
    g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]], rot);

    g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]], rot);
    g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]], rot);
    g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]], rot);
    g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]], rot);
  }

  for (i, word) in h.iter_mut().enumerate() {
    *word ^= v[i] ^ v[i + 8];
  }
}
