use super::{quantize4, quantize8, Direction4, Direction8};
use crate::config::GestureConfig;
use crate::stroke::{valid_prefix, Sample};

/// Run-length compressed direction signatures of a stroke.
///
/// Diagnostic only: the shape classifiers work from the raw geometry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectionSequences {
    pub seq8: Vec<Direction8>,
    pub seq4: Vec<Direction4>,
}

impl DirectionSequences {
    /// Renders `seq4` as concatenated letters, e.g. `"DR"`.
    #[must_use]
    pub fn seq4_string(&self) -> String {
        self.seq4.iter().map(|d| d.symbol()).collect()
    }

    /// Renders `seq8` joined with dashes, e.g. `"D-DR-R"`.
    #[must_use]
    pub fn seq8_string(&self) -> String {
        self.seq8
            .iter()
            .map(|d| d.symbol())
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Compresses a stroke into 8-way and 4-way direction sequences.
///
/// Displacements are measured from a pivot that only advances once a sample
/// lies at least `min_segment_px` away from it, which suppresses jitter.
/// Consecutive repeats are collapsed. A 4-way segment that fits no axis
/// appends nothing but clears the repeat memory, so returning to the same
/// axis after such a gap appends it again.
#[must_use]
pub fn extract_sequences(points: &[Sample], config: &GestureConfig) -> DirectionSequences {
    let points = valid_prefix(points);
    let mut out = DirectionSequences::default();
    let Some(first) = points.first() else {
        return out;
    };

    let mut pivot = first.pos;
    let mut last8: Option<Direction8> = None;
    let mut last4: Option<Direction4> = None;

    for p in &points[1..] {
        let d = p.pos - pivot;
        if d.norm() < config.min_segment_px {
            continue;
        }

        let d8 = quantize8(d.x, d.y);
        if last8 != Some(d8) {
            out.seq8.push(d8);
            last8 = Some(d8);
        }

        match quantize4(d.x, d.y, config.cardinal_tolerance_deg) {
            Some(d4) if last4 != Some(d4) => {
                out.seq4.push(d4);
                last4 = Some(d4);
            }
            Some(_) => {}
            None => last4 = None,
        }

        pivot = p.pos;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::{Direction4 as D4, Direction8 as D8};

    fn stroke(coords: &[(f64, f64)]) -> Vec<Sample> {
        coords
            .iter()
            .zip(0u32..)
            .map(|(&(x, y), i)| Sample::new(x, y, f64::from(i) * 16.0))
            .collect()
    }

    #[test]
    fn straight_line_collapses_to_one_symbol() {
        let pts = stroke(&[(0.0, 0.0), (25.0, 0.0), (50.0, 1.0), (75.0, 0.0), (100.0, 0.0)]);
        let seqs = extract_sequences(&pts, &GestureConfig::default());
        assert_eq!(seqs.seq8, vec![D8::Right]);
        assert_eq!(seqs.seq4, vec![D4::Right]);
    }

    #[test]
    fn l_shape_signature() {
        let pts = stroke(&[(0.0, 0.0), (0.0, 30.0), (0.0, 60.0), (30.0, 60.0), (60.0, 60.0)]);
        let seqs = extract_sequences(&pts, &GestureConfig::default());
        assert_eq!(seqs.seq8, vec![D8::Down, D8::Right]);
        assert_eq!(seqs.seq4, vec![D4::Down, D4::Right]);
        assert_eq!(seqs.seq4_string(), "DR");
        assert_eq!(seqs.seq8_string(), "D-R");
    }

    #[test]
    fn jitter_below_min_segment_is_ignored() {
        let pts = stroke(&[(0.0, 0.0), (5.0, 3.0), (-4.0, 2.0), (3.0, -5.0), (30.0, 0.0)]);
        let seqs = extract_sequences(&pts, &GestureConfig::default());
        assert_eq!(seqs.seq8, vec![D8::Right]);
        assert_eq!(seqs.seq4, vec![D4::Right]);
    }

    #[test]
    fn diagonal_gap_resets_seq4_memory() {
        // R, then a diagonal that fits no axis, then R again.
        let pts = stroke(&[(0.0, 0.0), (30.0, 0.0), (60.0, 30.0), (90.0, 30.0)]);
        let seqs = extract_sequences(&pts, &GestureConfig::default());
        assert_eq!(seqs.seq8, vec![D8::Right, D8::DownRight, D8::Right]);
        assert_eq!(seqs.seq4, vec![D4::Right, D4::Right]);
    }

    #[test]
    fn empty_and_single_point_streams() {
        let cfg = GestureConfig::default();
        assert_eq!(extract_sequences(&[], &cfg), DirectionSequences::default());
        let one = stroke(&[(3.0, 4.0)]);
        assert_eq!(extract_sequences(&one, &cfg), DirectionSequences::default());
    }
}
