use crate::{BUFFER_SIZE, MAX_VOICES};

/// One block of generated audio: every voice's buffer plus their sum.
///
/// Fixed-size and `Copy`, so the audio thread can publish a complete copy to
/// the UI without allocating. Only the first `len` samples of each buffer
/// belong to the latest block.
#[derive(Clone, Copy)]
pub struct Waveforms {
    pub(crate) voices: [[f32; BUFFER_SIZE]; MAX_VOICES],
    pub(crate) combined: [f32; BUFFER_SIZE],
    pub(crate) enabled: [bool; MAX_VOICES],
    pub(crate) len: usize,
}

impl Waveforms {
    pub fn new() -> Self {
        Self {
            voices: [[0.0; BUFFER_SIZE]; MAX_VOICES],
            combined: [0.0; BUFFER_SIZE],
            enabled: [false; MAX_VOICES],
            len: BUFFER_SIZE,
        }
    }

    /// Number of valid samples in each buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sum of all enabled voices for the latest block.
    pub fn combined(&self) -> &[f32] {
        &self.combined[..self.len]
    }

    /// One voice's buffer. Disabled voices keep whatever they last produced.
    pub fn voice(&self, index: usize) -> &[f32] {
        &self.voices[index][..self.len]
    }

    /// Whether the voice took part in the latest block.
    pub fn is_enabled(&self, index: usize) -> bool {
        self.enabled.get(index).copied().unwrap_or(false)
    }

    /// Indices of the voices that took part in the latest block, in order.
    pub fn enabled_voices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..MAX_VOICES).filter(move |&i| self.enabled[i])
    }

    /// Largest absolute value in the combined buffer.
    pub fn peak(&self) -> f32 {
        self.combined().iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }

    /// Root mean square of the combined buffer.
    pub fn rms(&self) -> f32 {
        let combined = self.combined();
        if combined.is_empty() {
            return 0.0;
        }
        (combined.iter().map(|&x| x * x).sum::<f32>() / combined.len() as f32).sqrt()
    }
}

impl Default for Waveforms {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Waveforms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Waveforms")
            .field("len", &self.len)
            .field("enabled", &self.enabled)
            .field("peak", &self.peak())
            .finish()
    }
}
