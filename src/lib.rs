pub mod config;
pub mod dsp; // Per-voice oscillators
pub mod io; // Sample conversion and the audio device
pub mod playback; // Pause/resume/quit state machine
pub mod scope; // Waveform-to-screen mapping
pub mod synth; // Oscillator bank and the audio callback body

pub use config::Config;

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44_100;
/// Frames per audio callback block; also the length of every waveform buffer.
pub const BUFFER_SIZE: usize = 1024;
/// Number of voices in the bank.
pub const MAX_VOICES: usize = 4;
/// Default per-voice amplitude.
pub const AMPLITUDE: f32 = 0.25;
/// A major chord: A4, C#5, E5, A5.
pub const CHORD: [f32; MAX_VOICES] = [440.0, 554.37, 659.25, 880.0];
