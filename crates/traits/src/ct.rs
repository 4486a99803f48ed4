//! Constant-time comparison. No secret-dependent branching.

/// Constant-time byte-slice equality.
///
/// Slices of different lengths compare unequal; the length itself is not
/// treated as secret.
#[inline]
#[must_use]
pub fn eq(a: &[u8], b: &[u8]) -> bool {
  if a.len() != b.len() {
    return false;
  }

  let mut diff: u8 = 0;
  for (&x, &y) in a.iter().zip(b.iter()) {
    diff |= x ^ y;
  }
  // Fence: keep the optimiser from short-circuiting the loop.
  core::hint::black_box(diff) == 0
}
