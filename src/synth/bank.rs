//! Oscillator bank - fixed set of sine voices summed into a chord
//!
//! Runs inside the audio callback: no allocation, no locking, no I/O.

use crate::{dsp::SineVoice, synth::Waveforms, Config, BUFFER_SIZE, MAX_VOICES};

/// Owns every voice and the buffers they render into.
pub struct OscillatorBank {
    voices: [SineVoice; MAX_VOICES],
    waveforms: Waveforms,
    sample_rate: f32,
    blocks_rendered: u64,
}

impl OscillatorBank {
    /// Create a bank with one voice per frequency, all at the same amplitude.
    pub fn new(sample_rate: f32, amplitude: f32, frequencies: [f32; MAX_VOICES]) -> Self {
        Self {
            voices: frequencies.map(|frequency| SineVoice::new(frequency, amplitude)),
            waveforms: Waveforms::new(),
            sample_rate,
            blocks_rendered: 0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.sample_rate as f32,
            config.amplitude,
            config.frequencies,
        )
    }

    /// Generate the next `len` samples for every enabled voice and their sum.
    ///
    /// `len` is capped at `BUFFER_SIZE`. Disabled voices are skipped: their
    /// buffers keep stale data and are not added to the combined buffer.
    pub fn render_block(&mut self, len: usize) {
        let len = len.min(BUFFER_SIZE);
        let Waveforms {
            voices: buffers,
            combined,
            enabled,
            len: block_len,
        } = &mut self.waveforms;

        let combined = &mut combined[..len];
        combined.fill(0.0);

        // Fixed voice order keeps the float summation reproducible
        for (index, (voice, buffer)) in self.voices.iter_mut().zip(buffers.iter_mut()).enumerate() {
            enabled[index] = voice.is_enabled();
            if !enabled[index] {
                continue;
            }

            let buffer = &mut buffer[..len];
            voice.render(buffer, self.sample_rate);

            for (out, &sample) in combined.iter_mut().zip(buffer.iter()) {
                *out += sample;
            }
        }

        *block_len = len;
        self.blocks_rendered += 1;
    }

    /// Buffers produced by the latest `render_block`.
    pub fn waveforms(&self) -> &Waveforms {
        &self.waveforms
    }

    pub fn voice(&self, index: usize) -> Option<&SineVoice> {
        self.voices.get(index)
    }

    /// Retune one voice. `0.0` disables it from the next block on.
    pub fn set_frequency(&mut self, index: usize, frequency: f32) {
        if let Some(voice) = self.voices.get_mut(index) {
            voice.set_frequency(frequency);
        }
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// How many blocks have been generated since construction.
    pub fn blocks_rendered(&self) -> u64 {
        self.blocks_rendered
    }
}
