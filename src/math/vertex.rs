use super::{perp_distance, Point2};

/// The interior point of a stroke farthest from the chord joining its endpoints.
///
/// This is the single split Douglas-Peucker would make first; for a stroke
/// that is really two straight legs it lands on the bend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexCandidate {
    /// Index of `vertex` in the stroke.
    pub index: usize,
    pub start: Point2,
    pub end: Point2,
    pub vertex: Point2,
    /// Perpendicular distance from `vertex` to the `start`–`end` chord.
    pub distance: f64,
}

/// Finds the interior point with the largest perpendicular distance to the
/// chord from the first to the last point.
///
/// Returns `None` for fewer than three points, or when every interior point
/// lies on the chord. Ties keep the earliest point.
#[must_use]
pub fn find_vertex<P: AsRef<Point2>>(points: &[P]) -> Option<VertexCandidate> {
    let [first, interior @ .., last] = points else {
        return None;
    };
    let start = *first.as_ref();
    let end = *last.as_ref();

    let mut best: Option<(usize, f64)> = None;
    for (i, p) in interior.iter().enumerate() {
        let d = perp_distance(p.as_ref(), &start, &end);
        if d > best.map_or(0.0, |(_, bd)| bd) {
            best = Some((i + 1, d));
        }
    }

    let (index, distance) = best?;
    Some(VertexCandidate {
        index,
        start,
        end,
        vertex: *points[index].as_ref(),
        distance,
    })
}
