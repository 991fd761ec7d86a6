//! Benchmarks for the lazy sequence vs eager std equivalents.
//!
//! Compares recipe construction, traversal, prefixing an unbounded
//! sequence, replay and reshaping against hand-written `Vec`/iterator
//! pipelines.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fluss::sequence::List;
use std::collections::HashSet;
use std::hint::black_box;

// =============================================================================
// Recipe Construction Benchmark (no traversal)
// =============================================================================

fn benchmark_recipe_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("recipe_construction");

    for size in [100, 1000, 10000] {
        let values: Vec<i32> = (0..size).collect();

        // Building the List pipeline defers all element production
        group.bench_with_input(
            BenchmarkId::new("List_recipe", size),
            &size,
            |bencher, _| {
                let source = List::of(values.clone());
                bencher.iter(|| {
                    let pipeline = source.map(|n| n * 2).filter(|n| n % 3 != 0);
                    black_box(pipeline)
                });
            },
        );

        // The eager equivalent pays for the full traversal up front
        group.bench_with_input(
            BenchmarkId::new("Vec_eager", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let computed: Vec<i32> = values
                        .iter()
                        .map(|n| n * 2)
                        .filter(|n| n % 3 != 0)
                        .collect();
                    black_box(computed)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Traversal Benchmark (materializing a built pipeline)
// =============================================================================

fn benchmark_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traversal");

    for size in [100, 1000, 10000] {
        let values: Vec<i32> = (0..size).collect();
        let pipeline = List::of(values.clone()).map(|n| n * 2).filter(|n| n % 3 != 0);

        group.bench_with_input(BenchmarkId::new("List", size), &size, |bencher, _| {
            bencher.iter(|| black_box(pipeline.to_vec()));
        });

        group.bench_with_input(BenchmarkId::new("Iterator", size), &size, |bencher, _| {
            bencher.iter(|| {
                let computed: Vec<i32> = values
                    .iter()
                    .map(|n| n * 2)
                    .filter(|n| n % 3 != 0)
                    .collect();
                black_box(computed)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Prefix of an Unbounded Sequence Benchmark
// =============================================================================

fn benchmark_prefix_of_unbounded(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("prefix_of_unbounded");

    for count in [10_usize, 100, 1000] {
        let naturals: List<i64> = List::iterate(|| 0..);

        group.bench_with_input(
            BenchmarkId::new("List", count),
            &count,
            |bencher, &count| {
                bencher.iter(|| black_box(naturals.map(|n| n * n).take(count).to_vec()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Iterator", count),
            &count,
            |bencher, &count| {
                bencher.iter(|| {
                    let squares: Vec<i64> = (0_i64..).map(|n| n * n).take(count).collect();
                    black_box(squares)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Replay Benchmark (two traversals of one pipeline)
// =============================================================================

fn benchmark_replay(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("replay");

    for size in [100, 1000] {
        let values: Vec<i32> = (0..size).collect();
        let pipeline = List::of(values.clone()).map(|n| n + 1);

        // Every traversal recomputes the pipeline from its source
        group.bench_with_input(
            BenchmarkId::new("List_two_traversals", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let first: i64 = pipeline.iter().map(i64::from).sum();
                    let second: i64 = pipeline.iter().map(i64::from).sum();
                    black_box((first, second))
                });
            },
        );

        // The eager shape materializes once and reuses the buffer
        group.bench_with_input(
            BenchmarkId::new("Vec_materialized_once", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let cached: Vec<i32> = values.iter().map(|n| n + 1).collect();
                    let first: i64 = cached.iter().copied().map(i64::from).sum();
                    let second: i64 = cached.iter().copied().map(i64::from).sum();
                    black_box((first, second))
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Reshaping Benchmark (sort and deduplication)
// =============================================================================

fn benchmark_reshaping(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reshaping");

    for size in [100, 1000] {
        let values: Vec<i32> = (0..size).map(|n| (n * 7919) % 101).collect();

        group.bench_with_input(
            BenchmarkId::new("List_sort", size),
            &size,
            |bencher, _| {
                let sequence = List::of(values.clone());
                bencher.iter(|| black_box(sequence.sort(|left, right| left.cmp(right)).to_vec()));
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec_sort", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut sorted = values.clone();
                sorted.sort();
                black_box(sorted)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("List_unique", size),
            &size,
            |bencher, _| {
                let sequence = List::of(values.clone());
                bencher.iter(|| black_box(sequence.unique_by(|n| *n).to_vec()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Vec_unique", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let mut seen = HashSet::new();
                    let unique: Vec<i32> =
                        values.iter().copied().filter(|n| seen.insert(*n)).collect();
                    black_box(unique)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_recipe_construction,
    benchmark_traversal,
    benchmark_prefix_of_unbounded,
    benchmark_replay,
    benchmark_reshaping
);

criterion_main!(benches);
