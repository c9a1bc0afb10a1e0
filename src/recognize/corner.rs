use tracing::trace;

use super::GestureResult;
use crate::action::{GestureKey, GestureMap};
use crate::config::GestureConfig;
use crate::direction::quantize4;
use crate::math::find_vertex;
use crate::stroke::{valid_prefix, Sample};

/// Detects an L-corner: two axis-aligned legs that change direction once.
///
/// The bend is the point of maximum deviation from the endpoint chord. Legs
/// run start→vertex and vertex→end, must each be at least `l_min_leg_px`
/// long, must snap to different axes, and the resulting two-letter key must
/// be bound to an action. Only the well-formed prefix of `points` is used.
#[must_use]
pub fn detect_l(
    points: &[Sample],
    config: &GestureConfig,
    map: &GestureMap,
) -> Option<GestureResult> {
    let corner = find_vertex(valid_prefix(points))?;
    if corner.distance < config.min_segment_px {
        trace!(deviation = corner.distance, "corner too shallow");
        return None;
    }

    let leg1 = corner.vertex - corner.start;
    let leg2 = corner.end - corner.vertex;
    if leg1.norm() < config.l_min_leg_px || leg2.norm() < config.l_min_leg_px {
        trace!(leg1 = leg1.norm(), leg2 = leg2.norm(), "corner legs too short");
        return None;
    }

    let d1 = quantize4(leg1.x, leg1.y, config.cardinal_tolerance_deg)?;
    let d2 = quantize4(leg2.x, leg2.y, config.cardinal_tolerance_deg)?;
    if d1 == d2 {
        return None;
    }

    GestureResult::resolve(GestureKey::Corner(d1, d2), map)
}
