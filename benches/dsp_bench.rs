//! Benchmarks for the realtime path.
//!
//! Run with: cargo bench
//!
//! Everything here runs inside the audio callback, so it has to finish well
//! within one buffer's playback time.
//!
//! Reference timing at 44.1kHz sample rate:
//!   - 256 samples  = 5.80ms deadline
//!   - 512 samples  = 11.61ms deadline
//!   - 1024 samples = 23.22ms deadline
//!
//! Benchmark groups:
//!   - dsp/*        Single oscillator and sample conversion
//!   - scenarios/*  Full bank and device-callback rendering

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Block sizes up to the fixed device buffer.
pub const BLOCK_SIZES: &[usize] = &[256, 512, 1024];

criterion_group!(
    benches,
    // Low-level DSP primitives
    dsp::bench_oscillator,
    dsp::bench_converter,
    // Real-world scenarios
    scenarios::bench_bank,
);
criterion_main!(benches);
