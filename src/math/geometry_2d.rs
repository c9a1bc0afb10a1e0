use super::{Point2, Vector2, DEGENERATE_LENGTH};

/// Returns the Euclidean distance between `a` and `b`.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Returns the length of the polyline through `points` (sum of segment lengths).
///
/// Zero for fewer than two points.
#[must_use]
pub fn path_length<'a, I>(points: I) -> f64
where
    I: IntoIterator<Item = &'a Point2>,
{
    let mut iter = points.into_iter();
    let Some(mut prev) = iter.next() else {
        return 0.0;
    };
    let mut len = 0.0;
    for p in iter {
        len += distance(prev, p);
        prev = p;
    }
    len
}

/// Returns the angle of `(dx, dy)` in degrees, normalized to `[0, 360)`.
///
/// 0° points along +x and angles grow toward +y, which is clockwise on a
/// screen where y grows downward.
#[must_use]
pub fn angle_deg(dx: f64, dy: f64) -> f64 {
    let a = dy.atan2(dx).to_degrees();
    let a = (a + 360.0) % 360.0;
    // atan2 of a tiny negative dy rounds to exactly 360 after the shift.
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Returns the smallest absolute difference between two angles, in `[0, 180]`.
#[must_use]
pub fn angle_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

/// Returns the perpendicular distance from `p` to the infinite line through
/// `a` and `b`.
///
/// Uses the triangle-area formula. Returns 0 when `a` and `b` are closer than
/// [`DEGENERATE_LENGTH`].
#[must_use]
pub fn perp_distance(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let v = b - a;
    let w = p - a;
    let len = v.norm();
    if len < DEGENERATE_LENGTH {
        return 0.0;
    }
    v.perp(&w).abs() / len
}

/// Returns the angle between `v1` and `v2` in degrees, in `[0, 180]`.
///
/// A vector shorter than [`DEGENERATE_LENGTH`] has no meaningful direction;
/// such pairs report 180° (maximally divergent).
#[must_use]
pub fn vector_angle_deg(v1: &Vector2, v2: &Vector2) -> f64 {
    let l1 = v1.norm();
    let l2 = v2.norm();
    if l1 < DEGENERATE_LENGTH || l2 < DEGENERATE_LENGTH {
        return 180.0;
    }
    let c = (v1.dot(v2) / (l1 * l2)).clamp(-1.0, 1.0);
    c.acos().to_degrees()
}
