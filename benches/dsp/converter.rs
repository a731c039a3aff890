//! Benchmarks for f32 -> i32 sample conversion.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fourplay::io::write_i32;

use crate::BLOCK_SIZES;

pub fn bench_converter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/converter");

    for &size in BLOCK_SIZES {
        let src: Vec<f32> = (0..size).map(|i| (i as f32 / size as f32) * 2.0 - 1.0).collect();
        let mut dst = vec![0i32; size];

        // Clamp + scale + truncate
        group.bench_with_input(BenchmarkId::new("i32", size), &size, |b, _| {
            b.iter(|| {
                write_i32(black_box(&src), black_box(&mut dst));
            })
        });
    }

    group.finish();
}
