use super::Band;

/// Vertical arrangement of the plot: the combined waveform across the top
/// half, then one equal strip per voice stacked down the bottom half.
#[derive(Debug, Clone, PartialEq)]
pub struct StackLayout {
    pub combined: Band,
    pub voices: Vec<Band>,
}

impl StackLayout {
    pub fn new(height: f64, voices: usize) -> Self {
        let half = height / 2.0;
        let combined = Band::new(half / 2.0, half);

        let strip = if voices == 0 { 0.0 } else { half / voices as f64 };
        let voices = (0..voices)
            .map(|i| Band::new(half + strip * (i as f64 + 0.5), strip))
            .collect();

        Self { combined, voices }
    }
}
