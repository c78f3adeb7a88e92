//! Search performance benchmarks
//!
//! Measures performance of:
//! - Exact vector search at catalog scale
//! - Batched keyword queries
//! - Price constraint parsing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use storegenius_core::search::{parse_price_range, Metric, VectorIndex};

const ROWS: usize = 20_000;
const DIMENSIONS: usize = 64;

/// Deterministic pseudo-random vectors (xorshift)
fn sample_vectors(count: usize, seed: u64) -> Vec<Vec<f32>> {
    let mut state = seed.max(1);
    (0..count)
        .map(|_| {
            (0..DIMENSIONS)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    (state % 2000) as f32 / 1000.0 - 1.0
                })
                .collect()
        })
        .collect()
}

fn bench_search_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_search");
    let rows = sample_vectors(ROWS, 42);
    let query = sample_vectors(1, 7).remove(0);

    for metric in [Metric::Cosine, Metric::L2] {
        let index = VectorIndex::build(&rows, metric).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(metric), &index, |b, index| {
            b.iter(|| index.search_one(black_box(&query), black_box(20)).unwrap());
        });
    }

    group.finish();
}

fn bench_search_limits(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_limits");
    let index = VectorIndex::build(&sample_vectors(ROWS, 42), Metric::Cosine).unwrap();
    let query = sample_vectors(1, 7).remove(0);

    for k in [5, 20, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| index.search_one(black_box(&query), black_box(k)).unwrap());
        });
    }

    group.finish();
}

fn bench_keyword_batch(c: &mut Criterion) {
    let index = VectorIndex::build(&sample_vectors(ROWS, 42), Metric::Cosine).unwrap();
    let queries = sample_vectors(5, 99);

    c.bench_function("keyword_batch_search", |b| {
        b.iter(|| index.search(black_box(&queries), black_box(5)).unwrap());
    });
}

fn bench_price_parsing(c: &mut Criterion) {
    let prompts = [
        "running shoes between $1,000 and $3,000",
        "a lamp for my desk under 500",
        "around 1500 for a 500ml bottle",
        "something nice for my mother",
    ];

    c.bench_function("parse_price_range", |b| {
        b.iter(|| {
            for prompt in &prompts {
                black_box(parse_price_range(black_box(prompt)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_search_metrics,
    bench_search_limits,
    bench_keyword_batch,
    bench_price_parsing,
);
criterion_main!(benches);
