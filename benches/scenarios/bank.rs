//! Benchmarks for the oscillator bank and the device callback body.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fourplay::{
    synth::{engine::SCOPE_RING_CAPACITY, Engine, OscillatorBank},
    AMPLITUDE, CHORD,
};
use rtrb::RingBuffer;

use crate::BLOCK_SIZES;

pub fn bench_bank(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/bank");

    for &size in BLOCK_SIZES {
        // === SINGLE: one 440 Hz voice ===
        let mut single = OscillatorBank::new(44_100.0, 0.5, [440.0, 0.0, 0.0, 0.0]);
        group.bench_with_input(BenchmarkId::new("single_voice", size), &size, |b, &size| {
            b.iter(|| single.render_block(black_box(size)))
        });

        // === CHORD: all four voices summed ===
        let mut chord = OscillatorBank::new(44_100.0, AMPLITUDE, CHORD);
        group.bench_with_input(BenchmarkId::new("chord", size), &size, |b, &size| {
            b.iter(|| chord.render_block(black_box(size)))
        });

        // === CALLBACK: chord + conversion + snapshot publish ===
        // Drained every iteration so publishing never takes the drop path
        let (tx, mut rx) = RingBuffer::new(SCOPE_RING_CAPACITY);
        let mut engine = Engine::new(OscillatorBank::new(44_100.0, AMPLITUDE, CHORD), tx);
        let mut data = vec![0i32; size];
        group.bench_with_input(BenchmarkId::new("callback", size), &size, |b, _| {
            b.iter(|| {
                engine.process(black_box(&mut data));
                while rx.pop().is_ok() {}
            })
        });
    }

    group.finish();
}
