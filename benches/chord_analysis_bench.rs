//! Performance benchmarks for chord analysis

use chordgrade::{analyze_samples, AnalysisConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_analyze_samples(c: &mut Criterion) {
    // Synthetic C major chord (30 seconds at 22.05 kHz)
    let sample_rate = 22050u32;
    let samples: Vec<f32> = (0..sample_rate * 30)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            let two_pi = 2.0 * std::f32::consts::PI;
            ((two_pi * 261.63 * t).sin() + (two_pi * 329.63 * t).sin() + (two_pi * 392.0 * t).sin())
                / 3.0
        })
        .collect();

    let config = AnalysisConfig::default();

    c.bench_function("analyze_samples_30s", |b| {
        b.iter(|| {
            let _ = analyze_samples(
                black_box(&samples),
                black_box(sample_rate),
                black_box(&config),
            );
        });
    });
}

criterion_group!(benches, bench_analyze_samples);
criterion_main!(benches);
