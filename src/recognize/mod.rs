//! Gesture recognition: gating plus an ordered chain of shape classifiers.
//!
//! ```text
//! samples ─▶ valid prefix ─▶ gates (count, duration, travel)
//!         ─▶ classifier chain, first match wins ─▶ GestureResult
//! ```
//!
//! The default chain is [`DEFAULT_CHAIN`] (L-corner, then swipe). Callers
//! that also want checkmarks pass [`checkmark_chain`] or their own slice of
//! classifiers to [`Recognize::with_chain`].

mod corner;
mod swipe;
mod vshape;

pub use corner::detect_l;
pub use swipe::{detect_swipe, SWIPE_MAX_CROSS_RATIO, SWIPE_MAX_DEVIATION_RATIO};
pub use vshape::{detect_v, detect_v_relaxed};

use tracing::{debug, trace};

use crate::action::{Action, GestureKey, GestureMap};
use crate::config::GestureConfig;
use crate::direction::extract_sequences;
use crate::math::path_length;
use crate::stroke::{duration_ms, valid_prefix, Sample};

/// A recognized gesture and the action it is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureResult {
    pub key: GestureKey,
    pub action: Action,
}

impl GestureResult {
    /// Looks `key` up in `map`; `None` if it is unbound or bound to
    /// [`Action::None`].
    #[must_use]
    pub fn resolve(key: GestureKey, map: &GestureMap) -> Option<Self> {
        map.resolve(key).map(|action| Self { key, action })
    }

    /// Human-readable name of the bound action.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.action.label()
    }
}

/// A shape detector that can take part in a recognition chain.
pub trait Classifier {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Attempts to classify `points`, returning `None` on no match.
    fn classify(
        &self,
        points: &[Sample],
        config: &GestureConfig,
        map: &GestureMap,
    ) -> Option<GestureResult>;
}

/// L-corner classifier ([`detect_l`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct CornerClassifier;

/// Straight swipe classifier ([`detect_swipe`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeClassifier;

/// Maximum-deviation V classifier ([`detect_v`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct VShapeClassifier;

/// Extreme-point V classifier ([`detect_v_relaxed`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct RelaxedVShapeClassifier;

impl Classifier for CornerClassifier {
    fn name(&self) -> &'static str {
        "corner"
    }

    fn classify(
        &self,
        points: &[Sample],
        config: &GestureConfig,
        map: &GestureMap,
    ) -> Option<GestureResult> {
        detect_l(points, config, map)
    }
}

impl Classifier for SwipeClassifier {
    fn name(&self) -> &'static str {
        "swipe"
    }

    fn classify(
        &self,
        points: &[Sample],
        config: &GestureConfig,
        map: &GestureMap,
    ) -> Option<GestureResult> {
        detect_swipe(points, config, map)
    }
}

impl Classifier for VShapeClassifier {
    fn name(&self) -> &'static str {
        "v-shape"
    }

    fn classify(
        &self,
        points: &[Sample],
        config: &GestureConfig,
        map: &GestureMap,
    ) -> Option<GestureResult> {
        GestureResult::resolve(detect_v(points, config)?, map)
    }
}

impl Classifier for RelaxedVShapeClassifier {
    fn name(&self) -> &'static str {
        "v-shape-relaxed"
    }

    fn classify(
        &self,
        points: &[Sample],
        config: &GestureConfig,
        map: &GestureMap,
    ) -> Option<GestureResult> {
        GestureResult::resolve(detect_v_relaxed(points, config)?, map)
    }
}

/// L-corner, then swipe.
pub const DEFAULT_CHAIN: &[&dyn Classifier] = &[&CornerClassifier, &SwipeClassifier];

/// L-corner, strict V, relaxed V, then swipe.
pub const CHECKMARK_CHAIN: &[&dyn Classifier] = &[
    &CornerClassifier,
    &VShapeClassifier,
    &RelaxedVShapeClassifier,
    &SwipeClassifier,
];

/// L-corner, strict V, then swipe.
pub const STRICT_CHECKMARK_CHAIN: &[&dyn Classifier] =
    &[&CornerClassifier, &VShapeClassifier, &SwipeClassifier];

/// Returns the checkmark chain selected by `config.v_relaxed`.
#[must_use]
pub fn checkmark_chain(config: &GestureConfig) -> &'static [&'static dyn Classifier] {
    if config.v_relaxed {
        CHECKMARK_CHAIN
    } else {
        STRICT_CHECKMARK_CHAIN
    }
}

/// Recognizes one gesture attempt.
pub struct Recognize<'a> {
    points: &'a [Sample],
    chain: &'a [&'a dyn Classifier],
}

impl<'a> Recognize<'a> {
    /// Creates a recognition over `points` using [`DEFAULT_CHAIN`].
    #[must_use]
    pub fn new(points: &'a [Sample]) -> Self {
        Self {
            points,
            chain: DEFAULT_CHAIN,
        }
    }

    /// Replaces the classifier chain. Classifiers run in slice order.
    #[must_use]
    pub fn with_chain(mut self, chain: &'a [&'a dyn Classifier]) -> Self {
        self.chain = chain;
        self
    }

    /// Executes the recognition.
    ///
    /// The stream is first cut to its well-formed prefix. It then needs at
    /// least two samples, a duration of at most `max_time_ms`, and a travelled
    /// path of at least `min_total_px`; the first classifier to match wins.
    #[must_use]
    pub fn execute(&self, config: &GestureConfig, map: &GestureMap) -> Option<GestureResult> {
        let points = valid_prefix(self.points);
        if points.len() < 2 {
            trace!(samples = points.len(), "too few samples");
            return None;
        }

        let duration = duration_ms(points);
        if duration > config.max_time_ms {
            trace!(duration, "gesture took too long");
            return None;
        }

        let travel = path_length(points.iter().map(|s| &s.pos));
        if travel < config.min_total_px {
            trace!(travel, "gesture too small");
            return None;
        }

        if tracing::enabled!(tracing::Level::DEBUG) {
            let seqs = extract_sequences(points, config);
            debug!(
                travel = travel.round(),
                seq4 = %seqs.seq4_string(),
                seq8 = %seqs.seq8_string(),
                "gesture candidate"
            );
        }

        self.chain.iter().find_map(|classifier| {
            let result = classifier.classify(points, config, map)?;
            debug!(
                classifier = classifier.name(),
                key = %result.key,
                action = %result.action,
                "gesture recognized"
            );
            Some(result)
        })
    }
}

/// Recognizes `points` with the default chain.
///
/// Shorthand for `Recognize::new(points).execute(config, map)`.
#[must_use]
pub fn recognize(
    points: &[Sample],
    config: &GestureConfig,
    map: &GestureMap,
) -> Option<GestureResult> {
    Recognize::new(points).execute(config, map)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::direction::Direction4::{Down, Right};
    use crate::direction::{quantize4, Direction4};
    use crate::math::{angle_deg, angle_diff};

    /// Builds a stroke with samples evenly spread over `duration_ms`.
    fn timed_stroke(coords: &[(f64, f64)], duration_ms: f64) -> Vec<Sample> {
        let steps = coords.len().saturating_sub(1).max(1);
        #[allow(clippy::cast_precision_loss)]
        let dt = duration_ms / steps as f64;
        let mut t = 0.0;
        coords
            .iter()
            .map(|&(x, y)| {
                let s = Sample::new(x, y, t);
                t += dt;
                s
            })
            .collect()
    }

    fn horizontal_swipe() -> Vec<Sample> {
        let coords: Vec<(f64, f64)> = (0..=10).map(|i| (f64::from(i) * 10.0, 0.0)).collect();
        timed_stroke(&coords, 300.0)
    }

    fn checkmark() -> Vec<Sample> {
        timed_stroke(
            &[(-40.0, -60.0), (-20.0, -30.0), (0.0, 0.0), (20.0, -30.0), (40.0, -60.0)],
            400.0,
        )
    }

    // ── gates ──

    #[test]
    fn single_sample_is_no_match() {
        let pts = [Sample::new(0.0, 0.0, 0.0)];
        assert!(recognize(&pts, &GestureConfig::default(), &GestureMap::default()).is_none());
        assert!(recognize(&[], &GestureConfig::default(), &GestureMap::default()).is_none());
    }

    #[test]
    fn slow_gesture_is_no_match() {
        let coords: Vec<(f64, f64)> = (0..=10).map(|i| (f64::from(i) * 10.0, 0.0)).collect();
        let pts = timed_stroke(&coords, 1600.0);
        assert!(recognize(&pts, &GestureConfig::default(), &GestureMap::default()).is_none());
    }

    #[test]
    fn duration_limit_is_inclusive() {
        let pts = timed_stroke(&[(0.0, 0.0), (100.0, 0.0)], 1500.0);
        assert!(recognize(&pts, &GestureConfig::default(), &GestureMap::default()).is_some());
    }

    #[test]
    fn small_gesture_is_no_match() {
        let pts = timed_stroke(&[(0.0, 0.0), (20.0, 0.0), (40.0, 0.0), (55.0, 0.0)], 200.0);
        assert!(recognize(&pts, &GestureConfig::default(), &GestureMap::default()).is_none());
    }

    #[test]
    fn travel_counts_path_not_chord() {
        // Chord is 50px but the path doubles back for 150px: passes the travel
        // gate, then fails the swipe's own displacement check.
        let pts = timed_stroke(&[(0.0, 0.0), (100.0, 0.0), (50.0, 0.0)], 300.0);
        let cfg = GestureConfig {
            min_total_px: 120.0,
            ..GestureConfig::default()
        };
        let travel = path_length(pts.iter().map(|s| &s.pos));
        assert!(travel >= cfg.min_total_px);
        assert!(recognize(&pts, &cfg, &GestureMap::default()).is_none());
    }

    // ── default chain ──

    #[test]
    fn horizontal_swipe_is_right() {
        let pts = horizontal_swipe();
        let cfg = GestureConfig::default();
        let map = GestureMap::default();
        assert!(detect_l(&pts, &cfg, &map).is_none());
        let r = recognize(&pts, &cfg, &map).unwrap();
        assert_eq!(r.key, GestureKey::Swipe(Right));
        assert_eq!(r.key.to_string(), "R");
        assert_eq!(r.action, Action::Forward);
    }

    #[test]
    fn down_right_corner() {
        let pts = timed_stroke(&[(0.0, 0.0), (0.0, 60.0), (60.0, 60.0)], 300.0);
        let r = recognize(&pts, &GestureConfig::default(), &GestureMap::default()).unwrap();
        assert_eq!(r.key, GestureKey::Corner(Down, Right));
        assert_eq!(r.key.to_string(), "DR");
        assert_eq!(r.action, Action::CloseTab);
        assert_eq!(r.label(), "Close tab");
    }

    #[test]
    fn corner_takes_priority_over_swipe() {
        // Long right leg with a short hook: both an RD corner and a rightward swipe.
        let pts = timed_stroke(&[(0.0, 0.0), (75.0, 0.0), (150.0, 0.0), (150.0, 40.0)], 400.0);
        let cfg = GestureConfig::default();
        let map = GestureMap::default();
        assert!(detect_swipe(&pts, &cfg, &map).is_some());

        let r = recognize(&pts, &cfg, &map).unwrap();
        assert_eq!(r.key.to_string(), "RD");
        assert_eq!(r.action, Action::Reload);

        let swipe_first: [&dyn Classifier; 2] = [&SwipeClassifier, &CornerClassifier];
        let r = Recognize::new(&pts)
            .with_chain(&swipe_first)
            .execute(&cfg, &map)
            .unwrap();
        assert_eq!(r.key, GestureKey::Swipe(Right));
    }

    #[test]
    fn default_chain_ignores_checkmarks() {
        let mut map = GestureMap::default();
        map.insert(GestureKey::V, Action::NewTab);
        assert!(recognize(&checkmark(), &GestureConfig::default(), &map).is_none());
    }

    #[test]
    fn malformed_tail_is_truncated() {
        let mut pts = timed_stroke(&[(0.0, 0.0), (0.0, 60.0), (60.0, 60.0)], 300.0);
        pts.push(Sample::new(f64::NAN, 0.0, 350.0));
        pts.push(Sample::new(-500.0, 900.0, 400.0));
        let r = recognize(&pts, &GestureConfig::default(), &GestureMap::default()).unwrap();
        assert_eq!(r.key, GestureKey::Corner(Down, Right));
    }

    // ── checkmark chains ──

    #[test]
    fn checkmark_chain_recognizes_bound_v() {
        let cfg = GestureConfig::default();
        let mut map = GestureMap::default();
        map.insert(GestureKey::V, Action::CloseAllTabs);
        let r = Recognize::new(&checkmark())
            .with_chain(checkmark_chain(&cfg))
            .execute(&cfg, &map)
            .unwrap();
        assert_eq!(r.key, GestureKey::V);
        assert_eq!(r.action, Action::CloseAllTabs);
    }

    #[test]
    fn unbound_v_falls_through() {
        let cfg = GestureConfig::default();
        let r = Recognize::new(&checkmark())
            .with_chain(CHECKMARK_CHAIN)
            .execute(&cfg, &GestureMap::default());
        assert!(r.is_none());
    }

    #[test]
    fn relaxed_flag_selects_chain() {
        let strict = GestureConfig {
            v_relaxed: false,
            ..GestureConfig::default()
        };
        assert_eq!(checkmark_chain(&strict).len(), 3);
        assert_eq!(checkmark_chain(&GestureConfig::default()).len(), 4);

        // A near-vertical V only the relaxed detector accepts. DU is unbound so
        // the corner classifier lets it through.
        let pts = timed_stroke(&[(0.0, 0.0), (5.0, 40.0), (10.0, 80.0), (15.0, 40.0), (20.0, 0.0)], 400.0);
        let mut map = GestureMap::default();
        map.insert(GestureKey::Corner(Direction4::Down, Direction4::Up), Action::None);
        map.insert(GestureKey::V, Action::ScrollTop);
        let relaxed = Recognize::new(&pts)
            .with_chain(checkmark_chain(&GestureConfig::default()))
            .execute(&GestureConfig::default(), &map);
        assert_eq!(relaxed.map(|r| r.key), Some(GestureKey::V));
        let strict_result = Recognize::new(&pts)
            .with_chain(checkmark_chain(&strict))
            .execute(&strict, &map);
        assert!(strict_result.is_none());
    }

    #[test]
    fn classifier_names() {
        let names: Vec<&str> = CHECKMARK_CHAIN.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["corner", "v-shape", "v-shape-relaxed", "swipe"]);
    }

    // ── properties ──

    fn coord() -> impl Strategy<Value = f64> {
        -400.0..400.0f64
    }

    fn stroke_coords(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<(f64, f64)>> {
        prop::collection::vec((coord(), coord()), len)
    }

    proptest! {
        #[test]
        fn prop_fewer_than_two_samples_never_match(x in coord(), y in coord(), t in 0.0..1000.0f64) {
            let pts = [Sample::new(x, y, t)];
            prop_assert!(recognize(&pts, &GestureConfig::default(), &GestureMap::default()).is_none());
        }

        #[test]
        fn prop_slow_gestures_never_match(
            coords in stroke_coords(2..40),
            extra in 0.001..10_000.0f64,
        ) {
            let cfg = GestureConfig::default();
            let pts = timed_stroke(&coords, cfg.max_time_ms + extra);
            prop_assume!(duration_ms(&pts) > cfg.max_time_ms);
            let map = GestureMap::default();
            prop_assert!(recognize(&pts, &cfg, &map).is_none());
            prop_assert!(Recognize::new(&pts).with_chain(CHECKMARK_CHAIN).execute(&cfg, &map).is_none());
        }

        #[test]
        fn prop_short_travel_never_matches(
            coords in prop::collection::vec((0.0..10.0f64, 0.0..10.0f64), 2..5),
        ) {
            let cfg = GestureConfig::default();
            let pts = timed_stroke(&coords, 200.0);
            prop_assert!(path_length(pts.iter().map(|s| &s.pos)) < cfg.min_total_px);
            let map = GestureMap::default();
            prop_assert!(recognize(&pts, &cfg, &map).is_none());
            prop_assert!(Recognize::new(&pts).with_chain(CHECKMARK_CHAIN).execute(&cfg, &map).is_none());
        }

        #[test]
        fn prop_recognition_is_idempotent(
            coords in stroke_coords(2..40),
            duration in 0.0..2000.0f64,
        ) {
            let cfg = GestureConfig::default();
            let map = GestureMap::default();
            let pts = timed_stroke(&coords, duration);
            prop_assert_eq!(recognize(&pts, &cfg, &map), recognize(&pts, &cfg, &map));
            let chain = checkmark_chain(&cfg);
            prop_assert_eq!(
                Recognize::new(&pts).with_chain(chain).execute(&cfg, &map),
                Recognize::new(&pts).with_chain(chain).execute(&cfg, &map)
            );
        }

        #[test]
        fn prop_results_are_bound_actions(coords in stroke_coords(2..40)) {
            let cfg = GestureConfig::default();
            let map = GestureMap::default();
            let pts = timed_stroke(&coords, 500.0);
            if let Some(r) = recognize(&pts, &cfg, &map) {
                prop_assert_eq!(map.resolve(r.key), Some(r.action));
                prop_assert_ne!(r.action, Action::None);
            }
        }

        #[test]
        fn prop_quantize4_stays_within_tolerance(
            dx in coord(),
            dy in coord(),
            tol in 5.0..60.0f64,
        ) {
            prop_assume!(dx.abs() > 1e-6 || dy.abs() > 1e-6);
            if let Some(dir) = quantize4(dx, dy, tol) {
                let axis = Direction4::AXES
                    .iter()
                    .find(|(d, _)| *d == dir)
                    .map(|(_, deg)| *deg)
                    .unwrap();
                prop_assert!(angle_diff(angle_deg(dx, dy), axis) <= tol);
            }
        }
    }
}
