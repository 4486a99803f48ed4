//! `std::io` integration.
//!
//! Every hasher is a [`std::io::Write`] sink, so `std::io::copy` can feed it
//! directly. [`DigestWriter`] tees bytes into a hasher on their way to another
//! writer.
//!
//! # Example
//!
//! ```
//! use std::io::Write;
//!
//! use blake2_engine::{Blake2s256, Digest};
//!
//! let mut writer = Blake2s256::writer(Vec::new());
//! writer.write_all(b"hello world")?;
//! let (out, digest) = writer.into_parts()?;
//! assert_eq!(out, b"hello world");
//! assert_eq!(digest, Blake2s256::digest(b"hello world"));
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::DigestWriter;

use crate::{engine::Blake2, variant::Variant};

impl<V: Variant> std::io::Write for Blake2<V> {
  /// Absorbs the whole of `buf`; fails once the hasher is finalized.
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf)?;
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::{
    io::{self, Write},
    vec::Vec,
  };

  use traits::KeyedDigest;

  use super::*;
  use crate::{Blake2b512, Blake2s256};

  #[test]
  fn write_reports_full_length() {
    let mut h = Blake2b512::new();
    assert_eq!(h.write(b"abc").unwrap(), 3);
    assert_eq!(h.write(&[]).unwrap(), 0);
    assert_eq!(h.finalize().unwrap(), Blake2b512::digest(b"abc"));
  }

  #[test]
  fn io_copy_matches_one_shot() {
    let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
    let mut h = Blake2s256::new_keyed(b"copy key").unwrap();
    io::copy(&mut &data[..], &mut h).unwrap();
    assert_eq!(h.finalize().unwrap(), Blake2s256::digest_keyed(b"copy key", &data).unwrap());
  }

  #[test]
  fn write_after_finalize_fails() {
    let mut h = Blake2s256::new();
    h.finalize().unwrap();
    let err = h.write(b"late").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
    assert!(h.write_all(b"late").is_err());
  }

  #[test]
  fn digest_writer_with_keyed_hasher() {
    let hasher = Blake2b512::new_keyed(b"tee").unwrap();
    let mut writer = DigestWriter::with_hasher(Vec::new(), hasher);
    writer.write_all(b"forwarded and hashed").unwrap();
    writer.flush().unwrap();
    let (out, tag) = writer.into_parts().unwrap();
    assert_eq!(out, b"forwarded and hashed".to_vec());

    let mut check = Blake2b512::new_keyed(b"tee").unwrap();
    check.update(&out).unwrap();
    assert!(check.verify(&tag).is_ok());
  }
}
