//! Low-level DSP primitives.
//!
//! These components are allocation-free and realtime-safe, so they can live
//! directly inside the audio callback state.

/// Phase-continuous sine oscillator.
pub mod oscillator;

pub use oscillator::SineVoice;
