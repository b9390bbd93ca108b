//! Benchmarks for the timer display engine.
//!
//! These benchmarks measure the pure conversion path that runs on every
//! timer tick.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use focusdeck_core::timer::{clock_text, duration_text, progress_ratio};

fn bench_progress_ratio(c: &mut Criterion) {
    c.bench_function("progress_ratio_mid_session", |b| {
        b.iter(|| progress_ratio(black_box(750), black_box(25)))
    });
}

fn bench_clock_text(c: &mut Criterion) {
    c.bench_function("clock_text_long_session", |b| {
        b.iter(|| clock_text(black_box(3661)))
    });
}

fn bench_duration_text(c: &mut Criterion) {
    c.bench_function("duration_text_with_hours", |b| {
        b.iter(|| duration_text(black_box(3661)))
    });
}

criterion_group!(
    benches,
    bench_progress_ratio,
    bench_clock_text,
    bench_duration_text
);
criterion_main!(benches);
