//! Synthetic pointer strokes for the replay demo.

use gestura::Sample;

/// All available stroke names.
pub const STROKES: &[&str] = &[
    "swipe_right",
    "swipe_up",
    "corner_down_right",
    "corner_right_up",
    "checkmark",
    "caret",
    "tall_v",
    "slow_swipe",
    "jitter",
];

/// Builds the named stroke. Returns `None` if the name is unknown.
pub fn build(name: &str) -> Option<Vec<Sample>> {
    let stroke = match name {
        "swipe_right" => polyline(&[(100.0, 300.0), (260.0, 304.0)], 250.0),
        "swipe_up" => polyline(&[(400.0, 500.0), (396.0, 380.0)], 200.0),
        "corner_down_right" => polyline(&[(200.0, 200.0), (202.0, 280.0), (290.0, 282.0)], 400.0),
        "corner_right_up" => polyline(&[(200.0, 400.0), (300.0, 398.0), (303.0, 310.0)], 400.0),
        "checkmark" => polyline(&[(200.0, 200.0), (240.0, 260.0), (300.0, 170.0)], 350.0),
        "caret" => polyline(&[(200.0, 300.0), (245.0, 230.0), (290.0, 300.0)], 350.0),
        "tall_v" => polyline(&[(300.0, 200.0), (305.0, 300.0), (312.0, 205.0)], 350.0),
        "slow_swipe" => polyline(&[(100.0, 300.0), (260.0, 300.0)], 2400.0),
        "jitter" => polyline(&[(300.0, 300.0), (312.0, 306.0), (305.0, 296.0), (318.0, 301.0)], 300.0),
        _ => return None,
    };
    Some(stroke)
}

/// Walks `corners` at an even pace, emitting a sample every 3px with a small
/// deterministic wobble, over `duration_ms` in total.
fn polyline(corners: &[(f64, f64)], duration_ms: f64) -> Vec<Sample> {
    const STEP_PX: f64 = 3.0;

    let mut coords = Vec::new();
    for pair in corners.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        let len = (x1 - x0).hypot(y1 - y0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = ((len / STEP_PX).ceil() as u32).max(1);
        for i in 0..steps {
            let f = f64::from(i) / f64::from(steps);
            let wobble = (f64::from(i) * 1.7).sin() * 0.8;
            coords.push((x0 + (x1 - x0) * f + wobble, y0 + (y1 - y0) * f - wobble));
        }
    }
    if let Some(&last) = corners.last() {
        coords.push(last);
    }

    let samples = coords.len().saturating_sub(1).max(1);
    coords
        .into_iter()
        .zip(0u32..)
        .map(|((x, y), i)| {
            #[allow(clippy::cast_precision_loss)]
            let t = duration_ms * f64::from(i) / samples as f64;
            Sample::new(x, y, t)
        })
        .collect()
}
