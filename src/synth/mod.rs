// Purpose: voice bank, chord mixing, and the realtime callback body
// This layer sits above the dsp oscillators and below the audio device

pub mod bank;
#[cfg(feature = "rtrb")]
pub mod engine;
pub mod waveforms;

pub use bank::OscillatorBank;
#[cfg(feature = "rtrb")]
pub use engine::Engine;
pub use waveforms::Waveforms;
