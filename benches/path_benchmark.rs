//! Benchmarks for path generation and polynomial tables

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use stochastic_montecarlo::{
    simulate_paths, Accumulator, GeometricBrownianMotion, HistogramAccumulator, PathGenerator,
    PrimitivePolynomials, RandomDeviates,
};

fn benchmark_path_generation(c: &mut Criterion) {
    let gbm = GeometricBrownianMotion::new(100.0, 0.1, 0.2);
    let n_steps = 252; // 1 year of daily data
    let duration = 1.0;

    let mut group = c.benchmark_group("Path Generation");

    for n_paths in [1000, 10000].iter() {
        group.bench_with_input(
            BenchmarkId::new("Sequential", n_paths),
            n_paths,
            |b, &n| {
                b.iter(|| {
                    let mut generator =
                        PathGenerator::new(&gbm, n_steps, duration, RandomDeviates::normal(7))
                            .unwrap();
                    (0..n)
                        .map(|_| generator.next_path().unwrap())
                        .collect::<Vec<_>>()
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Parallel", n_paths),
            n_paths,
            |b, &n| {
                b.iter(|| simulate_paths(&gbm, n_steps, duration, n, 7).unwrap());
            },
        );
    }

    group.finish();
}

fn benchmark_histogram(c: &mut Criterion) {
    let gbm = GeometricBrownianMotion::new(100.0, 0.1, 0.2);
    let paths = simulate_paths(&gbm, 252, 1.0, 1000, 11).unwrap();

    c.bench_function("Histogram of 1000 paths", |b| {
        b.iter(|| {
            let mut histogram = HistogramAccumulator::new();
            for path in &paths {
                histogram.add_path(path);
            }
            histogram
        });
    });

    c.bench_function("Histogram of terminal values", |b| {
        b.iter(|| {
            let mut histogram = HistogramAccumulator::new();
            histogram.add_values(paths.iter().filter_map(|p| p.terminal()));
            histogram
        });
    });
}

fn benchmark_polynomial_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("Primitive Polynomial Table");

    for capacity in [100u64, 21_200, 48_794].iter() {
        group.bench_with_input(
            BenchmarkId::new("Build", capacity),
            capacity,
            |b, &capacity| {
                b.iter(|| PrimitivePolynomials::new(capacity).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_path_generation,
    benchmark_histogram,
    benchmark_polynomial_tables
);
criterion_main!(benches);
