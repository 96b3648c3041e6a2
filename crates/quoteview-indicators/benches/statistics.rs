//! Benchmarks for the rolling statistics.

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quoteview_core::types::{Observation, Series};
use quoteview_indicators::{cumulative, histogram, sma, vwma};

fn generate_series(size: usize) -> Series {
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let observations = (0..size)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            let date = start + Days::new(i as u64);
            Observation::new(date, close, close + 1.0, close - 1.0, close, 1_000 + i as u64)
        })
        .collect();
    Series::from_ascending("BENCH", observations).unwrap()
}

fn benchmark_moving_averages(c: &mut Criterion) {
    let mut group = c.benchmark_group("MovingAverage");

    for size in [10, 1000, 10000].iter() {
        let series = generate_series(*size);

        group.bench_with_input(BenchmarkId::new("sma", size), &series, |b, series| {
            b.iter(|| sma(black_box(series), black_box(5)))
        });

        group.bench_with_input(BenchmarkId::new("vwma", size), &series, |b, series| {
            b.iter(|| vwma(black_box(series), black_box(5)))
        });
    }

    group.finish();
}

fn benchmark_cumulative(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cumulative");

    for size in [10, 1000, 10000].iter() {
        let series = generate_series(*size);
        group.bench_with_input(BenchmarkId::new("running", size), &series, |b, series| {
            b.iter(|| cumulative(black_box(series)))
        });
    }

    group.finish();
}

fn benchmark_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("Histogram");

    for size in [10, 1000, 10000].iter() {
        let series = generate_series(*size);
        group.bench_with_input(BenchmarkId::new("20 bins", size), &series, |b, series| {
            b.iter(|| histogram(black_box(series), black_box(20)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_moving_averages, benchmark_cumulative, benchmark_histogram);
criterion_main!(benches);
