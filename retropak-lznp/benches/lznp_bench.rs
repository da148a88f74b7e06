//! Performance benchmarks for the LZNP decoder.
//!
//! There is no LZNP encoder, so payloads are constructed directly: a
//! literal-heavy stream (one zero flag byte per eight literals) and a
//! run-heavy stream (superlength copies at distance 1).

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use retropak_lznp::decompress;
use std::hint::black_box;

/// All-literal payload for `data` (length must be a multiple of 8),
/// terminated by a match-flagged sentinel.
fn literal_payload(data: &[u8]) -> Vec<u8> {
    assert_eq!(data.len() % 8, 0);
    let mut out = Vec::with_capacity(data.len() + data.len() / 8 + 3);
    for chunk in data.chunks(8) {
        out.push(0x00);
        out.extend_from_slice(chunk);
    }
    out.extend_from_slice(&[0x01, 0x00, 0x00]);
    out
}

/// One literal expanded by superlength copies at distance 1. Returns the
/// payload and its decoded size: 1 + (7 + 8 * (groups - 1)) * 262 bytes.
fn run_payload(groups: usize) -> (Vec<u8>, usize) {
    assert!(groups >= 1);
    let mut out = vec![0xFE, 0xAA];
    for _ in 0..7 {
        out.extend_from_slice(&[0x50, 0x01, 0xFE]);
    }
    let mut copies = 7;
    for _ in 1..groups {
        out.push(0xFF);
        for _ in 0..8 {
            out.extend_from_slice(&[0x50, 0x01, 0xFE]);
        }
        copies += 8;
    }
    out.extend_from_slice(&[0x01, 0x00, 0x00]);
    (out, 1 + copies * 262)
}

/// Pseudo-random bytes from a fixed-seed LCG.
fn random_data(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed: u64 = 0x123456789ABCDEF0;
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

fn bench_literal_streams(c: &mut Criterion) {
    let mut group = c.benchmark_group("lznp_decode_literals");

    for (size_name, size) in [("1KB", 1024), ("16KB", 16 * 1024), ("64KB", 64 * 1024)] {
        let original = random_data(size);
        let payload = literal_payload(&original);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size_name),
            &payload,
            |b, payload| {
                b.iter(|| {
                    let decoded = decompress(black_box(payload), size).unwrap();
                    black_box(decoded);
                });
            },
        );
    }

    group.finish();
}

fn bench_run_streams(c: &mut Criterion) {
    let mut group = c.benchmark_group("lznp_decode_runs");

    for groups in [1usize, 8, 32] {
        let (payload, size) = run_payload(groups);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_groups", groups)),
            &payload,
            |b, payload| {
                b.iter(|| {
                    let decoded = decompress(black_box(payload), size).unwrap();
                    black_box(decoded);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_literal_streams, bench_run_streams);
criterion_main!(benches);
