//! Benchmarks for map-view operations over an in-memory shared object.
//!
//! Measures the per-call translation cost of the adapter:
//! - Insert/get round-trips (two lock acquisitions plus coercion)
//! - Full entry-iterator drains (name list re-fetch and linear key search per step)
//! - Value scans (`contains_value` over coerced values)

extern crate livemap;

use criterion::{criterion_group, criterion_main, Criterion};
use livemap::{LiveMapView, SharedObject};
use std::hint::black_box;

fn populated_view(count: usize) -> LiveMapView<SharedObject, i64> {
    let view: LiveMapView<SharedObject, i64> = LiveMapView::default();
    for i in 0..count {
        view.insert(&format!("key_{i}"), i as i64).unwrap();
    }
    view
}

/// Benchmark a single insert-then-get round-trip on a small object.
fn bench_insert_get_roundtrip(c: &mut Criterion) {
    let view = populated_view(16);

    c.bench_function("map_insert_get_roundtrip", |b| {
        b.iter(|| {
            view.insert(black_box("key_7"), black_box(42)).unwrap();
            black_box(view.get("key_7").unwrap())
        });
    });
}

/// Benchmark draining the entry iterator over 64 properties.
///
/// Each step re-fetches the name list and re-locates the cursor key by linear search,
/// so this is the quadratic worst case of the live-iteration contract.
fn bench_entry_drain(c: &mut Criterion) {
    let view = populated_view(64);

    c.bench_function("map_entry_drain_64", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for entry in view.entries() {
                count += entry.key().len();
            }
            black_box(count)
        });
    });
}

/// Benchmark a full `contains_value` scan that misses.
fn bench_contains_value_miss(c: &mut Criterion) {
    let view = populated_view(64);

    c.bench_function("map_contains_value_miss_64", |b| {
        b.iter(|| black_box(view.contains_value(black_box(&-1))));
    });
}

/// Benchmark the live values view iterated to completion.
fn bench_values_drain(c: &mut Criterion) {
    let view = populated_view(64);

    c.bench_function("map_values_drain_64", |b| {
        b.iter(|| {
            let sum: i64 = view.values().iter().map(Result::unwrap).sum();
            black_box(sum)
        });
    });
}

criterion_group!(
    benches,
    bench_insert_get_roundtrip,
    bench_entry_drain,
    bench_contains_value_miss,
    bench_values_drain
);
criterion_main!(benches);
