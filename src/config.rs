//! Runtime configuration.
//!
//! There is no command line or config file; the binary builds a `Config` in
//! code. Everything here has a default that reproduces the stock behaviour.

use std::time::Duration;

use color_eyre::eyre::{eyre, Result as EyreResult};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{AMPLITUDE, CHORD, MAX_VOICES, SAMPLE_RATE};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Peak amplitude of each individual voice.
    pub amplitude: f32,
    /// Frequency per voice slot in Hz. `0.0` disables the slot.
    pub frequencies: [f32; MAX_VOICES],
    /// Delay between redraws while playing (~60 fps).
    pub frame_interval: Duration,
    /// Input polling interval while paused.
    pub paused_poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            amplitude: AMPLITUDE,
            frequencies: CHORD,
            frame_interval: Duration::from_millis(16),
            paused_poll_interval: Duration::from_millis(100),
        }
    }
}

impl Config {
    /// Single-voice mode: one 440 Hz tone at half amplitude.
    pub fn single_tone() -> Self {
        Self {
            amplitude: 0.5,
            frequencies: [440.0, 0.0, 0.0, 0.0],
            ..Self::default()
        }
    }

    /// Set the per-voice amplitude
    pub fn amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Set the frequency of one voice slot (`0.0` disables it)
    pub fn voice(mut self, index: usize, frequency: f32) -> Self {
        if let Some(slot) = self.frequencies.get_mut(index) {
            *slot = frequency;
        }
        self
    }

    /// Replace all voice frequencies at once
    pub fn chord(mut self, frequencies: [f32; MAX_VOICES]) -> Self {
        self.frequencies = frequencies;
        self
    }

    /// Number of voices with a non-zero frequency.
    pub fn enabled_voices(&self) -> usize {
        self.frequencies.iter().filter(|&&f| f > 0.0).count()
    }

    /// Check that the configuration can drive the oscillator bank.
    ///
    /// Frequencies must stay below Nyquist: above it a single wrap per sample
    /// is no longer enough to keep the phase in range.
    pub fn validate(&self) -> EyreResult<()> {
        if self.sample_rate == 0 {
            return Err(eyre!("sample rate must be non-zero"));
        }
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(eyre!("invalid amplitude {}", self.amplitude));
        }

        let nyquist = self.sample_rate as f32 / 2.0;
        for (index, &frequency) in self.frequencies.iter().enumerate() {
            if !frequency.is_finite() || frequency < 0.0 {
                return Err(eyre!("voice {index}: invalid frequency {frequency}"));
            }
            if frequency >= nyquist {
                return Err(eyre!(
                    "voice {index}: {frequency} Hz is not below the Nyquist limit of {nyquist} Hz"
                ));
            }
        }

        if self.frame_interval.is_zero() {
            return Err(eyre!("frame interval must be non-zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid_chord() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.enabled_voices(), 4);
        assert_eq!(config.sample_rate, 44_100);
    }

    #[test]
    fn single_tone_has_one_voice() {
        let config = Config::single_tone();
        assert!(config.validate().is_ok());
        assert_eq!(config.enabled_voices(), 1);
        assert_eq!(config.amplitude, 0.5);
    }

    #[test]
    fn rejects_frequency_above_nyquist() {
        let config = Config::default().voice(2, 30_000.0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("voice 2"));
    }

    #[test]
    fn rejects_negative_values() {
        assert!(Config::default().amplitude(-0.1).validate().is_err());
        assert!(Config::default().voice(0, -1.0).validate().is_err());
        assert!(Config::default().amplitude(f32::NAN).validate().is_err());
    }

    #[test]
    fn out_of_range_voice_index_is_ignored() {
        let config = Config::default().voice(MAX_VOICES, 100.0);
        assert_eq!(config.frequencies, CHORD);
    }
}
