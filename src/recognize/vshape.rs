//! Checkmark (V) and caret (inverted V) detection.
//!
//! Screen y grows downward, so a V has its vertex at a larger y than both
//! endpoints and an inverted V at a smaller y.

use tracing::trace;

use crate::action::GestureKey;
use crate::config::GestureConfig;
use crate::direction::{quantize4, Direction4};
use crate::math::{find_vertex, vector_angle_deg, Point2, Vector2, DEGENERATE_LENGTH};
use crate::stroke::{valid_prefix, Sample};

/// Returns `true` if neither component of `v` is negligible and their ratio
/// lies within `[ratio_min, 1 / ratio_min]`.
fn is_diagonal(v: &Vector2, ratio_min: f64) -> bool {
    let (ax, ay) = (v.x.abs(), v.y.abs());
    if ax < DEGENERATE_LENGTH || ay < DEGENERATE_LENGTH {
        return false;
    }
    let r = ax / ay;
    (ratio_min..=1.0 / ratio_min).contains(&r)
}

/// Sign of `x` as -1, 0, or 1.
fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Classifies the vertex height against both endpoints, with a dead zone of
/// `margin` pixels.
fn orientation(vertex: &Point2, start: &Point2, end: &Point2, margin: f64) -> Option<GestureKey> {
    if vertex.y > start.y.max(end.y) + margin {
        Some(GestureKey::V)
    } else if vertex.y < start.y.min(end.y) - margin {
        Some(GestureKey::InvV)
    } else {
        None
    }
}

/// Detects a V or inverted V whose apex is the point of maximum chord
/// deviation.
///
/// Both legs, measured outward from the vertex, must be long enough,
/// genuinely diagonal, point to opposite horizontal sides, and open no wider
/// than `v_max_angle_deg`. Only the well-formed prefix of `points` is used.
#[must_use]
pub fn detect_v(points: &[Sample], config: &GestureConfig) -> Option<GestureKey> {
    let corner = find_vertex(valid_prefix(points))?;
    if corner.distance < config.min_segment_px {
        return None;
    }

    let leg1 = corner.start - corner.vertex;
    let leg2 = corner.end - corner.vertex;
    if leg1.norm() < config.v_min_leg_px || leg2.norm() < config.v_min_leg_px {
        trace!(leg1 = leg1.norm(), leg2 = leg2.norm(), "v legs too short");
        return None;
    }
    if !is_diagonal(&leg1, config.v_diagonal_ratio_min)
        || !is_diagonal(&leg2, config.v_diagonal_ratio_min)
    {
        trace!("v leg not diagonal");
        return None;
    }

    let (s1, s2) = (sign(leg1.x), sign(leg2.x));
    if s1 == 0 || s2 == 0 || s1 == s2 {
        return None;
    }

    let angle = vector_angle_deg(&leg1, &leg2);
    if angle > config.v_max_angle_deg {
        trace!(angle, "v opens too wide");
        return None;
    }

    orientation(
        &corner.vertex,
        &corner.start,
        &corner.end,
        config.v_vertex_margin_px,
    )
}

/// Detects a V or inverted V using the highest or lowest interior sample as
/// the apex.
///
/// Useful when the stroke wobbles near the apex so the maximum-deviation
/// point misses it. The topmost interior sample is tried first, then the
/// bottommost. Legs run start→apex and apex→end and must snap to vertical
/// axes: (up, down) with the apex above both endpoints is an inverted V,
/// (down, up) with the apex below both is a V. Only the well-formed prefix
/// of `points` is used.
#[must_use]
pub fn detect_v_relaxed(points: &[Sample], config: &GestureConfig) -> Option<GestureKey> {
    let points = valid_prefix(points);
    if points.len() < 3 {
        return None;
    }
    let start = points[0].pos;
    let end = points[points.len() - 1].pos;

    let mut idx_min_y = None;
    let mut idx_max_y = None;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (i, p) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        if p.pos.y < min_y {
            min_y = p.pos.y;
            idx_min_y = Some(i);
        }
        if p.pos.y > max_y {
            max_y = p.pos.y;
            idx_max_y = Some(i);
        }
    }

    let try_vertex = |idx: Option<usize>| -> Option<GestureKey> {
        let idx = idx.filter(|&i| i > 0 && i < points.len() - 1)?;
        let vtx = points[idx].pos;
        let leg1 = vtx - start;
        let leg2 = end - vtx;
        if leg1.norm() < config.v_min_leg_px || leg2.norm() < config.v_min_leg_px {
            return None;
        }
        let d1 = quantize4(leg1.x, leg1.y, config.cardinal_tolerance_deg)?;
        let d2 = quantize4(leg2.x, leg2.y, config.cardinal_tolerance_deg)?;
        let margin = config.v_vertex_margin_px;
        match (d1, d2) {
            (Direction4::Up, Direction4::Down) if vtx.y < start.y.min(end.y) - margin => {
                Some(GestureKey::InvV)
            }
            (Direction4::Down, Direction4::Up) if vtx.y > start.y.max(end.y) + margin => {
                Some(GestureKey::V)
            }
            _ => None,
        }
    };

    try_vertex(idx_min_y).or_else(|| try_vertex(idx_max_y))
}
