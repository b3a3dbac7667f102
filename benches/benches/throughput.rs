//! SANS19 Criterion Benchmark
//!
//! Latency and throughput of absorption and both finalizers.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small inputs (keys, IDs).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [(0, "0B"), (16, "16B"), (64, "64B"), (256, "256B"), (KB, "1KB")];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| sans19::hash(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: FILES
// =============================================================================

/// Whole-file throughput, absorbed in a single update call.
fn bench_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Files");
    group.sample_size(30);

    let sizes = [(64 * KB, "64KB"), (512 * KB, "512KB"), (MB, "1MB"), (8 * MB, "8MB")];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| sans19::hash(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: CHUNKED UPDATES
// =============================================================================

/// Cost of many small update calls (each re-derives the mix key).
fn bench_chunked_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Chunked-Updates");

    let total = 64 * KB;
    let input = random_input(total);
    group.throughput(Throughput::Bytes(total as u64));

    for chunk_size in [1, 16, 256, 4 * KB] {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(format!("{chunk_size}B-chunks")),
            &chunk_size,
            |b, &chunk| {
                b.iter(|| {
                    let mut hasher = sans19::Hasher::new();
                    for piece in input.chunks(chunk) {
                        hasher.update(black_box(piece));
                    }
                    hasher.finalize_short()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: FINALIZERS
// =============================================================================

/// Fixed cost of each finalizer and of the self-test.
fn bench_finalizers(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Finalizers");

    let input = random_input(64);
    let mut absorbed = sans19::Hasher::new();
    absorbed.update(&input);

    group.bench_function("finalize-short", |b| {
        b.iter(|| black_box(absorbed.clone()).finalize_short())
    });

    group.bench_function("finalize-wide", |b| {
        b.iter(|| black_box(absorbed.clone()).finalize_wide())
    });

    let digest = sans19::hash(&input);
    group.bench_function("verify", |b| {
        b.iter(|| sans19::verify(black_box(&input), black_box(&digest)))
    });

    group.bench_function("self-test", |b| b.iter(sans19::self_test));

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_files,
    bench_chunked_updates,
    bench_finalizers,
);

criterion_main!(benches);
