//! Benchmarks for sine voice generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fourplay::dsp::SineVoice;

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Sine - one sin() and a conditional wrap per sample
        let mut voice = SineVoice::new(440.0, 0.25);
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                voice.render(black_box(&mut buffer), black_box(44_100.0));
            })
        });
    }

    group.finish();
}
