use std::fmt;

use tracing::{debug, trace};

use super::Sample;
use crate::action::{Action, GestureMap};
use crate::config::GestureConfig;
use crate::math::distance;
use crate::recognize::{Classifier, GestureResult, Recognize, DEFAULT_CHAIN};

/// Minimum time (ms) between two live preview evaluations.
pub const PREVIEW_INTERVAL_MS: f64 = 80.0;

/// Minimum number of recorded samples before a preview is attempted.
const PREVIEW_MIN_POINTS: usize = 3;

/// A change in the live preview of the gesture being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewChange {
    /// The stroke so far would trigger this result.
    Show(GestureResult),
    /// The stroke so far no longer matches anything.
    Clear,
}

struct Tracking {
    config: GestureConfig,
    points: Vec<Sample>,
    last_accepted: Sample,
    last_preview: Option<Action>,
    preview_at: Option<f64>,
}

/// Collects pointer samples for one gesture at a time.
///
/// Idle until [`begin`](Self::begin); [`finish`](Self::finish) and
/// [`cancel`](Self::cancel) return it to idle. The configuration is captured
/// at `begin` and stays fixed for the rest of the gesture.
pub struct StrokeRecorder {
    chain: &'static [&'static dyn Classifier],
    state: Option<Tracking>,
}

impl fmt::Debug for StrokeRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain: Vec<&str> = self.chain.iter().map(|c| c.name()).collect();
        f.debug_struct("StrokeRecorder")
            .field("chain", &chain)
            .field("tracking", &self.is_tracking())
            .field("points", &self.points().len())
            .finish()
    }
}

impl Default for StrokeRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeRecorder {
    /// Creates an idle recorder whose previews use [`DEFAULT_CHAIN`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            chain: DEFAULT_CHAIN,
            state: None,
        }
    }

    /// Replaces the classifier chain used for previews.
    #[must_use]
    pub fn with_chain(mut self, chain: &'static [&'static dyn Classifier]) -> Self {
        self.chain = chain;
        self
    }

    /// Starts a new gesture at `sample`, discarding any gesture in progress.
    pub fn begin(&mut self, sample: Sample, config: GestureConfig) {
        debug!(x = sample.pos.x, y = sample.pos.y, "gesture started");
        self.state = Some(Tracking {
            config,
            points: vec![sample],
            last_accepted: sample,
            last_preview: None,
            preview_at: None,
        });
    }

    /// Offers a pointer move. Returns `true` if it was accepted as the new
    /// last sample.
    ///
    /// Moves are ignored while idle, when malformed, or when closer than
    /// `sample_min_px` to the last accepted sample. An accepted sample is
    /// stored only while fewer than `max_points` are held; later ones still
    /// advance the spacing reference but are not kept.
    pub fn push(&mut self, sample: Sample) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        if !sample.is_finite() {
            trace!("malformed sample dropped");
            return false;
        }
        if distance(&sample.pos, &state.last_accepted.pos) < state.config.sample_min_px {
            return false;
        }
        state.last_accepted = sample;
        if state.points.len() < state.config.max_points {
            state.points.push(sample);
        }
        true
    }

    /// Ends the gesture at `sample` and returns the recorded stream.
    ///
    /// The release sample is appended if there is room for it. Returns `None`
    /// if no gesture was in progress.
    pub fn finish(&mut self, sample: Sample) -> Option<Vec<Sample>> {
        let state = self.state.take()?;
        let mut points = state.points;
        if sample.is_finite() && points.len() < state.config.max_points {
            points.push(sample);
        }
        debug!(samples = points.len(), "gesture finished");
        Some(points)
    }

    /// Abandons the gesture in progress, if any.
    pub fn cancel(&mut self) {
        if let Some(state) = self.state.take() {
            debug!(samples = state.points.len(), "gesture cancelled");
        }
    }

    /// Re-evaluates the live preview at time `now_ms`.
    ///
    /// Runs at most once per [`PREVIEW_INTERVAL_MS`] and only once at least
    /// three samples are held. Returns a change only when the previewed action
    /// differs from the last one reported.
    pub fn preview(&mut self, now_ms: f64, map: &GestureMap) -> Option<PreviewChange> {
        let chain = self.chain;
        let state = self.state.as_mut()?;
        if state.points.len() < PREVIEW_MIN_POINTS {
            return None;
        }
        if state
            .preview_at
            .is_some_and(|at| now_ms - at < PREVIEW_INTERVAL_MS)
        {
            return None;
        }
        state.preview_at = Some(now_ms);

        let result = Recognize::new(&state.points)
            .with_chain(chain)
            .execute(&state.config, map);
        let action = result.map(|r| r.action);
        if action == state.last_preview {
            return None;
        }
        state.last_preview = action;
        Some(result.map_or(PreviewChange::Clear, PreviewChange::Show))
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.state.is_some()
    }

    /// Samples recorded so far; empty while idle.
    #[must_use]
    pub fn points(&self) -> &[Sample] {
        self.state.as_ref().map(|s| s.points.as_slice()).unwrap_or_default()
    }

    /// Configuration captured for the gesture in progress.
    #[must_use]
    pub fn config(&self) -> Option<&GestureConfig> {
        self.state.as_ref().map(|s| &s.config)
    }
}
