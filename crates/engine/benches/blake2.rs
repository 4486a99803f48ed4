use core::hint::black_box;

use blake2_engine::{Blake2b512, Blake2s256};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

mod common;

const KEY: &[u8; 32] = b"blake2 bench key, 32 bytes long!";

fn oneshot(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("blake2/oneshot");

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("blake2b512/engine", len), data, |b, d| {
      b.iter(|| black_box(Blake2b512::digest(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("blake2b512/blake2", len), data, |b, d| {
      b.iter(|| {
        use blake2::Digest as _;
        let out = blake2::Blake2b512::digest(black_box(d));
        black_box(out)
      })
    });

    group.bench_with_input(BenchmarkId::new("blake2s256/engine", len), data, |b, d| {
      b.iter(|| black_box(Blake2s256::digest(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("blake2s256/blake2", len), data, |b, d| {
      b.iter(|| {
        use blake2::Digest as _;
        let out = blake2::Blake2s256::digest(black_box(d));
        black_box(out)
      })
    });
  }

  group.finish();
}

fn keyed(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("blake2/keyed");

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("blake2b512/engine", len), data, |b, d| {
      b.iter(|| black_box(Blake2b512::digest_keyed(black_box(KEY), black_box(d)).unwrap()))
    });
    group.bench_with_input(BenchmarkId::new("blake2s256/engine", len), data, |b, d| {
      b.iter(|| black_box(Blake2s256::digest_keyed(black_box(KEY), black_box(d)).unwrap()))
    });
  }

  group.finish();
}

fn streaming(c: &mut Criterion) {
  let data = common::pseudo_random_bytes(1024 * 1024, 0x5EED_B1A4_E2B5_0001);
  let mut group = c.benchmark_group("blake2/streaming");
  common::set_throughput(&mut group, data.len());

  for chunk in [1usize, 64, 128, 4096] {
    group.bench_with_input(BenchmarkId::new("blake2b512", chunk), &chunk, |b, &chunk| {
      b.iter(|| {
        let mut h = Blake2b512::new();
        for part in data.chunks(chunk) {
          h.update(black_box(part)).unwrap();
        }
        black_box(h.finalize().unwrap())
      })
    });
    group.bench_with_input(BenchmarkId::new("blake2s256", chunk), &chunk, |b, &chunk| {
      b.iter(|| {
        let mut h = Blake2s256::new();
        for part in data.chunks(chunk) {
          h.update(black_box(part)).unwrap();
        }
        black_box(h.finalize().unwrap())
      })
    });
  }

  group.finish();
}

criterion_group!(benches, oneshot, keyed, streaming);
criterion_main!(benches);
