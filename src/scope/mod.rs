//! Waveform-to-screen mapping.
//!
//! Pure geometry: turns a sample buffer into line segments in a pixel space
//! where `y` grows downward. The UI hands the segments to whatever surface it
//! draws on.

pub mod layout;

pub use layout::StackLayout;

/// A horizontal strip of the plot that one waveform is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Vertical pixel position of the zero line.
    pub center: f64,
    /// Height of the strip; a full-scale sample reaches its top or bottom edge.
    pub height: f64,
}

impl Band {
    pub fn new(center: f64, height: f64) -> Self {
        Self { center, height }
    }

    /// Vertical pixel position of a sample value.
    #[inline]
    pub fn y(&self, sample: f32) -> f64 {
        self.center - sample as f64 * (self.height / 2.0)
    }
}

/// One straight line of a polyline, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Index of the sample shown at pixel column `x`.
///
/// Nearest-sample by truncation: `floor(x * len / width)`, no interpolation.
/// Integer arithmetic keeps the floor exact.
#[inline]
pub fn sample_index(x: usize, len: usize, width: usize) -> usize {
    if len == 0 || width == 0 {
        return 0;
    }
    (x * len / width).min(len - 1)
}

/// Polyline of `width - 1` segments tracing `samples` across `width` pixels.
///
/// Segment `x` joins column `x - 1` to column `x`. Yields nothing for an empty
/// buffer or a plot narrower than two pixels.
pub fn polyline(samples: &[f32], width: usize, band: Band) -> impl Iterator<Item = Segment> + '_ {
    let len = samples.len();
    let columns = if len == 0 { 0 } else { width };

    (1..columns).map(move |x| {
        let previous = samples[sample_index(x - 1, len, width)];
        let current = samples[sample_index(x, len, width)];
        Segment {
            x1: (x - 1) as f64,
            y1: band.y(previous),
            x2: x as f64,
            y2: band.y(current),
        }
    })
}
