//! Benchmarks to measure the compute overhead of `wall_time_tracker` itself.
//!
//! These benchmarks measure the overhead of the tracking infrastructure by
//! timing empty measurements - measurements that do not do any actual work but
//! still incur the clock reads and sample recording.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use wall_time_tracker::Registry;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("wall_time_tracker_overhead");

    // Baseline measurement - no tracking at all.
    group.bench_function("baseline_empty", |b| {
        b.iter(|| {
            black_box(());
        });
    });

    {
        let registry = Registry::new();

        let scope_timer = registry.named_timer("empty_scope");
        group.bench_function("scope_empty", |b| {
            b.iter(|| {
                let _scope = scope_timer.scope();
                // Empty scope - measures only the overhead of guard creation
                // and destruction.
                black_box(());
            });
        });

        let pair_timer = registry.named_timer("empty_pair");
        group.bench_function("start_stop_empty", |b| {
            b.iter(|| {
                pair_timer.start();
                black_box(());
                pair_timer.stop().expect("start was just called");
            });
        });

        let time_timer = registry.named_timer("empty_time");
        group.bench_function("time_closure_empty", |b| {
            b.iter(|| {
                time_timer.time(|| black_box(()));
            });
        });

        let mut wrapped = registry.wrap("empty_wrapped", || black_box(()));
        group.bench_function("wrapped_fn_empty", |b| {
            b.iter(|| {
                wrapped.call::<()>();
            });
        });
    }

    group.finish();
}
