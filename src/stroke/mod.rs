//! Pointer samples and the point streams built from them.

mod recorder;

pub use recorder::{PreviewChange, StrokeRecorder, PREVIEW_INTERVAL_MS};

use crate::math::Point2;

/// A single pointer position with its capture time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub pos: Point2,
    pub t: f64,
}

impl Sample {
    /// Creates a sample at `(x, y)` captured at `t` milliseconds.
    #[must_use]
    pub fn new(x: f64, y: f64, t: f64) -> Self {
        Self {
            pos: Point2::new(x, y),
            t,
        }
    }

    /// Returns `true` if the position and timestamp are all finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.pos.x.is_finite() && self.pos.y.is_finite() && self.t.is_finite()
    }
}

impl AsRef<Point2> for Sample {
    fn as_ref(&self) -> &Point2 {
        &self.pos
    }
}

/// Returns the longest well-formed prefix of `samples`.
///
/// The stream is cut at the first sample with a non-finite coordinate or
/// timestamp, or whose timestamp runs backwards; recognition then proceeds as
/// if the gesture had ended at the last valid sample.
#[must_use]
pub fn valid_prefix(samples: &[Sample]) -> &[Sample] {
    let mut prev_t = f64::NEG_INFINITY;
    let cut = samples
        .iter()
        .position(|s| {
            let bad = !s.is_finite() || s.t < prev_t;
            prev_t = s.t;
            bad
        })
        .unwrap_or(samples.len());
    &samples[..cut]
}

/// Returns the elapsed time between the first and last sample.
#[must_use]
pub fn duration_ms(samples: &[Sample]) -> f64 {
    match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => last.t - first.t,
        _ => 0.0,
    }
}
