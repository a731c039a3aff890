//! Real-world scenario benchmarks.
//!
//! These model what the audio callback actually does each time the device
//! asks for a buffer.

mod bank;

pub use bank::bench_bank;
