//! Build and query benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use zonemap::workload::{generate_point_queries, range_from_ratios};
use zonemap::ZoneMap;

const LEN: i32 = 100_000;

fn dataset() -> Vec<i32> {
    // Deterministic permutation of 0..LEN
    (0..LEN).map(|i| (i * 7919) % LEN).collect()
}

fn benchmark_build(c: &mut Criterion) {
    let data = dataset();
    let mut group = c.benchmark_group("build");
    for capacity in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &cap| {
            b.iter(|| ZoneMap::new(black_box(data.iter().copied()), cap));
        });
    }
    group.finish();
}

fn benchmark_point_queries(c: &mut Criterion) {
    let data = dataset();
    let map = ZoneMap::new(data.iter().copied(), data.len() / 100).expect("non-zero capacity");
    let mut rng = StdRng::seed_from_u64(42);
    let queries: Vec<i32> = generate_point_queries(&data, &mut rng)
        .into_iter()
        .take(1_000)
        .collect();

    c.bench_function("query_point x1000", |b| {
        b.iter(|| {
            queries
                .iter()
                .filter(|key| map.query_point(black_box(key)))
                .count()
        });
    });
}

fn benchmark_range_queries(c: &mut Criterion) {
    let data = dataset();
    let map = ZoneMap::new(data.iter().copied(), data.len() / 100).expect("non-zero capacity");

    let mut group = c.benchmark_group("query_range");
    for (label, start, end) in [("rq_1", 0.1, 0.2), ("rq_4", 0.7, 0.8)] {
        let range = range_from_ratios(&data, start, end).expect("non-empty dataset");
        group.bench_function(label, |b| {
            b.iter(|| map.query_range(black_box(&range.start), black_box(&range.end)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_build,
    benchmark_point_queries,
    benchmark_range_queries
);
criterion_main!(benches);
