//! Benchmarks for the matching engine.
//!
//! ## Running
//!
//! ```bash
//! cargo bench
//! cargo bench -- single_match
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use rust_decimal::Decimal;

use clob_sim::{MatchingEngine, Side};

/// Fixed-point-friendly price from integer cents
fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

/// Rest `count` asks on the book, one per level, starting at `base_cents`.
fn populate_asks(engine: &mut MatchingEngine, count: i64, base_cents: i64, quantity: u64) {
    for i in 0..count {
        engine
            .post_limit_order(Side::Sell, cents(base_cents + i), quantity)
            .unwrap();
    }
}

/// Rest `count` bids on the book, one per level, below `base_cents`.
fn populate_bids(engine: &mut MatchingEngine, count: i64, base_cents: i64, quantity: u64) {
    for i in 0..count {
        engine
            .post_limit_order(Side::Buy, cents(base_cents - i), quantity)
            .unwrap();
    }
}

/// Deterministic mixed order flow around 100.00.
fn generate_order_batch(count: usize, seed: u64) -> Vec<(Side, Decimal, u64)> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut orders = Vec::with_capacity(count);

    for _ in 0..count {
        let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
        let price = cents(rng.gen_range(9_950..=10_050));
        let quantity: u64 = rng.gen_range(1..=100);
        orders.push((side, price, quantity));
    }

    orders
}

// ============================================================================
// BENCHMARK: Single post latency
// ============================================================================

fn bench_single_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_match");

    group.measurement_time(Duration::from_secs(10));
    group.sample_size(1000);

    // Match a crossing buy against a book with 1,000 resting asks
    group.bench_function("against_1k_asks", |b| {
        b.iter_batched(
            || {
                let mut engine = MatchingEngine::with_capacity(2000);
                populate_asks(&mut engine, 1000, 10_000, 100);
                engine
            },
            |mut engine| black_box(engine.post_limit_order(Side::Buy, cents(10_000), 100)),
            BatchSize::SmallInput,
        );
    });

    // Sweep across ~10 price levels in one post
    group.bench_function("multi_level_sweep", |b| {
        b.iter_batched(
            || {
                let mut engine = MatchingEngine::with_capacity(200);
                populate_asks(&mut engine, 100, 10_000, 10);
                engine
            },
            |mut engine| black_box(engine.post_limit_order(Side::Buy, cents(10_010), 100)),
            BatchSize::SmallInput,
        );
    });

    // No crossing: the order rests on the book
    group.bench_function("no_match_rest_on_book", |b| {
        b.iter_batched(
            || {
                let mut engine = MatchingEngine::with_capacity(2000);
                populate_asks(&mut engine, 1000, 10_000, 100);
                engine
            },
            |mut engine| black_box(engine.post_limit_order(Side::Buy, cents(9_900), 100)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Book operations
// ============================================================================

fn bench_book_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("book_operations");

    group.measurement_time(Duration::from_secs(5));

    group.bench_function("post_to_empty", |b| {
        b.iter_batched(
            MatchingEngine::new,
            |mut engine| black_box(engine.post_limit_order(Side::Buy, cents(10_000), 100)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("cancel_in_1k_book", |b| {
        b.iter_batched(
            || {
                let mut engine = MatchingEngine::with_capacity(2000);
                populate_bids(&mut engine, 1000, 10_000, 100);
                engine
            },
            |mut engine| {
                // Middle of the book
                engine.cancel_order(500);
                black_box(engine.book().order_count())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("top_of_book_depth_10", |b| {
        let mut engine = MatchingEngine::with_capacity(2000);
        populate_bids(&mut engine, 1000, 10_000, 100);

        b.iter(|| black_box(engine.top_of_book(Side::Buy, 10)));
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Throughput
// ============================================================================

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    group.measurement_time(Duration::from_secs(15));
    group.sample_size(50);

    for batch_size in [1_000, 10_000, 50_000] {
        group.throughput(Throughput::Elements(batch_size as u64));

        group.bench_with_input(
            BenchmarkId::new("orders", batch_size),
            &batch_size,
            |b, &size| {
                let orders = generate_order_batch(size, 42);

                b.iter_batched(
                    || (MatchingEngine::with_capacity(size * 2), orders.clone()),
                    |(mut engine, orders)| {
                        for (side, price, quantity) in orders {
                            black_box(engine.post_limit_order(side, price, quantity)).unwrap();
                        }
                        engine.book().order_count()
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(
    benches,
    bench_single_match,
    bench_book_operations,
    bench_throughput
);

criterion_main!(benches);
