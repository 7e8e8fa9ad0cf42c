//! # Diagram Benchmarks
//!
//! Chart geometry at increasing curve resolution.
//!
//! Run: `cargo bench --bench diagram_bench`

use condensa_core::*;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_diagram(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagram_build");

    let input = CalculationInput::new(
        Reading {
            temperature: 10.0,
            relative_humidity: 80.0,
        },
        22.0,
    );
    let result = compute(&input).unwrap();

    for samples in [50usize, 100, 500, 1000] {
        let config = DiagramConfig {
            samples,
            ..DiagramConfig::default()
        };
        let builder = DiagramBuilder::with_config(config).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(samples), &builder, |b, builder| {
            b.iter(|| black_box(builder.build(&input, &result)))
        });
    }

    group.finish();
}

fn bench_assess(c: &mut Criterion) {
    let input = CalculationInput::new(
        Reading {
            temperature: 10.0,
            relative_humidity: 80.0,
        },
        22.0,
    );
    let thresholds = Thresholds::default();
    let diagram = DiagramConfig::default();

    c.bench_function("assess_default", |b| {
        b.iter(|| black_box(assess(&input, &thresholds, &diagram)))
    });
}

criterion_group!(benches, bench_diagram, bench_assess);
criterion_main!(benches);
