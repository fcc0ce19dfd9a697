//! Performance benchmarks for oxihuff.
//!
//! Measures compression and decompression throughput across data
//! patterns with very different symbol distributions: uniform (single
//! symbol), repetitive text, realistic text, and incompressible noise.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxihuff::{compress, decompress};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - all bytes are the same (maximally skewed tree)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - near-flat distribution (worst compression)
    pub fn random(size: usize) -> Vec<u8> {
        // Simple PRNG for reproducible random data
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            // Linear congruential generator
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Repetitive pattern - small alphabet, strong skew
    pub fn repetitive(size: usize) -> Vec<u8> {
        let pattern = b"TOBEORNOTTOBEORTOBEORNOT";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(pattern.len());
            data.extend_from_slice(&pattern[..chunk_size]);
        }
        data
    }

    /// Text-like data - realistic scenario
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! \
                     Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk_size]);
        }
        data
    }
}

fn bench_compress_patterns(c: &mut Criterion) {
    let patterns: [(&str, PatternGenerator); 4] = [
        ("uniform", test_data::uniform),
        ("repetitive", test_data::repetitive),
        ("text_like", test_data::text_like),
        ("random", test_data::random),
    ];

    let mut group = c.benchmark_group("compress");
    for (name, generator) in patterns {
        let data = generator(64 * 1024);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| compress(black_box(data)).unwrap());
        });
    }
    group.finish();
}

fn bench_decompress_patterns(c: &mut Criterion) {
    let patterns: [(&str, PatternGenerator); 4] = [
        ("uniform", test_data::uniform),
        ("repetitive", test_data::repetitive),
        ("text_like", test_data::text_like),
        ("random", test_data::random),
    ];

    let mut group = c.benchmark_group("decompress");
    for (name, generator) in patterns {
        let data = generator(64 * 1024);
        let compressed = compress(&data).unwrap();
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &compressed,
            |b, compressed| {
                b.iter(|| decompress(black_box(compressed)).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_input_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_sizes");
    for size in [1024, 16 * 1024, 256 * 1024] {
        let data = test_data::text_like(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| compress(black_box(data)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_compress_patterns,
    bench_decompress_patterns,
    bench_input_sizes
);
criterion_main!(benches);
