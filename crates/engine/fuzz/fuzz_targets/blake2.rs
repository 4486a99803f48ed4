#![no_main]

use blake2::digest::{KeyInit, Mac};
use blake2_engine::{Blake2b512, Blake2s256};
use libfuzzer_sys::fuzz_target;

fn split_point(input: &[u8]) -> usize {
  if input.is_empty() {
    return 0;
  }
  (input[0] as usize) % (input.len() + 1)
}

/// First byte picks a key length, the key is taken from the front of the input.
fn key_and_message(input: &[u8], max_key: usize) -> (&[u8], &[u8]) {
  let Some((&first, rest)) = input.split_first() else {
    return (&[], &[]);
  };
  let key_len = core::cmp::min(first as usize % (max_key + 1), rest.len());
  rest.split_at(key_len)
}

fuzz_target!(|input: &[u8]| {
  let split = split_point(input);
  let (a, b) = input.split_at(split);

  {
    let ours = Blake2s256::digest(input);
    let mut h = Blake2s256::new();
    h.update(a).unwrap();
    h.update(b).unwrap();
    assert_eq!(ours, h.finalize().unwrap());
    assert!(h.finalize().is_err());

    use blake2::Digest as _;
    let ref_out = blake2::Blake2s256::digest(input);
    let mut expected = [0u8; 32];
    expected.copy_from_slice(&ref_out);
    assert_eq!(ours, expected);
  }

  {
    let ours = Blake2b512::digest(input);
    let mut h = Blake2b512::new();
    h.update(a).unwrap();
    h.update(b).unwrap();
    assert_eq!(ours, h.finalize().unwrap());
    assert!(h.update(a).is_err());

    use blake2::Digest as _;
    let ref_out = blake2::Blake2b512::digest(input);
    let mut expected = [0u8; 64];
    expected.copy_from_slice(&ref_out);
    assert_eq!(ours, expected);
  }

  {
    let (key, msg) = key_and_message(input, 32);
    let ours = Blake2s256::digest_keyed(key, msg).unwrap();
    if !key.is_empty() {
      let mut mac = <blake2::Blake2sMac256 as KeyInit>::new_from_slice(key).unwrap();
      Mac::update(&mut mac, msg);
      assert_eq!(&ours[..], &mac.finalize().into_bytes()[..]);
    }
  }

  {
    let (key, msg) = key_and_message(input, 64);
    let ours = Blake2b512::digest_keyed(key, msg).unwrap();
    if !key.is_empty() {
      let mut mac = <blake2::Blake2bMac512 as KeyInit>::new_from_slice(key).unwrap();
      Mac::update(&mut mac, msg);
      assert_eq!(&ours[..], &mac.finalize().into_bytes()[..]);
    }
  }
});
