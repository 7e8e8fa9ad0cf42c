//! # Psychrometric Benchmarks
//!
//! Measures the closed-form Magnus functions and the full `assess` pass.
//!
//! Run: `cargo bench --bench psychro_bench`

use condensa_core::*;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_magnus(c: &mut Criterion) {
    let mut group = c.benchmark_group("magnus");

    group.bench_function("saturation_pressure", |b| {
        b.iter(|| black_box(saturation_pressure(black_box(21.5))))
    });

    group.bench_function("dew_point", |b| {
        b.iter(|| black_box(dew_point(black_box(10.0), black_box(80.0))))
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let thresholds = Thresholds::default();

    for (t_out, rh, t_in) in [(10.0, 80.0, 22.0), (-5.0, 70.0, 21.0), (28.0, 75.0, 24.0)] {
        let input = CalculationInput::new(
            Reading {
                temperature: t_out,
                relative_humidity: rh,
            },
            t_in,
        );
        let id = format!("{}C_{}pct_to_{}C", t_out, rh, t_in);

        group.bench_with_input(BenchmarkId::new("compute", &id), &input, |b, input| {
            b.iter(|| black_box(compute(input)))
        });

        group.bench_with_input(BenchmarkId::new("classify", &id), &input, |b, input| {
            let result = compute(input).unwrap();
            b.iter(|| black_box(thresholds.classify(&result)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_magnus, bench_pipeline);
criterion_main!(benches);
