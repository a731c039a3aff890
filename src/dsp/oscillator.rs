use std::f32::consts::TAU;

/*
Sine Oscillator
===============

A voice produces `amplitude * sin(phase)` once per sample and then advances
its phase by a fixed increment:

    increment = 2π * frequency / sample_rate

Example: 440 Hz at 44.1 kHz
  - increment = 2π * 440 / 44100 ≈ 0.0627 radians per sample
  - one full cycle every 44100 / 440 ≈ 100.2 samples


Phase Continuity
----------------

The phase belongs to the voice and survives between blocks. The audio driver
asks for audio in chunks (1024 samples here), and the waveform has to carry on
exactly where the previous chunk stopped:

    block N          block N+1
    ...╱╲╱╲╱╲╱ | ╲╱╲╱╲...      phase carried  -> smooth
    ...╱╲╱╲╱╲╱ | ╱╲╱╲╱...      phase reset    -> click

Resetting the phase at a block boundary produces a step in the waveform,
which is heard as a click every ~23 ms.


Wrapping
--------

`sin` is periodic, so the phase only needs to stay bounded. Each sample does a
single conditional subtraction:

    phase += increment
    if phase >= 2π { phase -= 2π }

One subtraction per increment is enough as long as the increment is below 2π,
i.e. the frequency is below the sample rate (in practice below Nyquist, which
`Config::validate` enforces). It is cheaper than `%` and never lets the phase
grow large enough to lose f32 precision.


Disabled Voices
---------------

A frequency of 0 (or less) marks the voice as disabled. The bank skips it
entirely; `render` itself does not special-case it.
*/

/// A single sine oscillator with its own phase accumulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineVoice {
    frequency: f32,
    amplitude: f32,
    phase: f32,
}

impl SineVoice {
    pub fn new(frequency: f32, amplitude: f32) -> Self {
        Self {
            frequency,
            amplitude,
            phase: 0.0,
        }
    }

    /// A voice that contributes nothing to the mix.
    pub fn silent() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Fill `out` with the next `out.len()` samples, carrying the phase over.
    #[inline]
    pub fn render(&mut self, out: &mut [f32], sample_rate: f32) {
        let increment = TAU * self.frequency / sample_rate;

        for sample in out.iter_mut() {
            *sample = self.amplitude * self.phase.sin();
            self.phase += increment;
            if self.phase >= TAU {
                self.phase -= TAU;
            }
        }

        debug_assert!(
            self.frequency <= 0.0 || (0.0..TAU).contains(&self.phase),
            "phase escaped [0, 2π): {}",
            self.phase
        );
    }

    /// Phase advance per sample at the given rate.
    pub fn increment(&self, sample_rate: f32) -> f32 {
        TAU * self.frequency / sample_rate
    }

    pub fn is_enabled(&self) -> bool {
        self.frequency > 0.0
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Change pitch without touching the phase, so the waveform stays continuous.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn set_amplitude(&mut self, amplitude: f32) {
        self.amplitude = amplitude;
    }

    /// Current phase in radians, always in `[0, 2π)`.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn reset_phase(&mut self) {
        self.phase = 0.0;
    }
}
