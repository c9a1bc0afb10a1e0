use tracing::trace;

use super::GestureResult;
use crate::action::{GestureKey, GestureMap};
use crate::config::GestureConfig;
use crate::direction::Direction4;
use crate::math::find_vertex;
use crate::stroke::{valid_prefix, Sample};

/// Largest corner deviation a swipe tolerates, as a fraction of its dominant
/// displacement.
pub const SWIPE_MAX_DEVIATION_RATIO: f64 = 0.3;

/// Largest minor/major displacement ratio a swipe tolerates.
pub const SWIPE_MAX_CROSS_RATIO: f64 = 0.5;

/// Detects a straight swipe along one screen axis.
///
/// The endpoint displacement must reach `min_total_px` on its dominant axis,
/// the path must stay within [`SWIPE_MAX_DEVIATION_RATIO`] of that
/// displacement from the chord, and the cross-axis displacement must stay
/// within [`SWIPE_MAX_CROSS_RATIO`] of it. Horizontal wins when both axes
/// are equal. Only the well-formed prefix of `points` is used.
#[must_use]
pub fn detect_swipe(
    points: &[Sample],
    config: &GestureConfig,
    map: &GestureMap,
) -> Option<GestureResult> {
    let points = valid_prefix(points);
    let (first, last) = match points {
        [first, .., last] => (first, last),
        _ => return None,
    };
    let d = last.pos - first.pos;
    let (abs_dx, abs_dy) = (d.x.abs(), d.y.abs());

    let dominant = abs_dx.max(abs_dy);
    if dominant < config.min_total_px {
        trace!(dominant, "swipe too short");
        return None;
    }
    if let Some(corner) = find_vertex(points) {
        if corner.distance > dominant * SWIPE_MAX_DEVIATION_RATIO {
            trace!(deviation = corner.distance, dominant, "swipe path bends");
            return None;
        }
    }

    let dir = if abs_dx >= abs_dy {
        if abs_dy > abs_dx * SWIPE_MAX_CROSS_RATIO {
            return None;
        }
        if d.x < 0.0 {
            Direction4::Left
        } else {
            Direction4::Right
        }
    } else {
        if abs_dx > abs_dy * SWIPE_MAX_CROSS_RATIO {
            return None;
        }
        if d.y < 0.0 {
            Direction4::Up
        } else {
            Direction4::Down
        }
    };

    GestureResult::resolve(GestureKey::Swipe(dir), map)
}
