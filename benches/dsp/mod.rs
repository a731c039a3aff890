//! Benchmarks for low-level DSP primitives.

mod converter;
mod oscillator;

pub use converter::bench_converter;
pub use oscillator::bench_oscillator;
