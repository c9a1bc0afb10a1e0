//! Recognizer thresholds.
//!
//! A [`GestureConfig`] is an immutable snapshot: the host loads or edits it
//! and hands a copy to each recognition call. Field names serialize in the
//! camelCase form used by stored settings (`minSegmentPx`, `maxTimeMs`, …),
//! and keys missing from a stored object fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Thresholds that parameterize every classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GestureConfig {
    /// Minimum displacement (px) for a sequence segment, and the minimum
    /// corner deviation for the L and V detectors.
    pub min_segment_px: f64,
    /// Minimum total travel (px) of a gesture, and the minimum dominant-axis
    /// displacement of a swipe.
    pub min_total_px: f64,
    /// Maximum duration (ms) from first to last sample.
    pub max_time_ms: f64,
    /// Angular tolerance (degrees) for snapping a leg to a screen axis.
    pub cardinal_tolerance_deg: f64,
    /// Minimum leg length (px) of an L-corner.
    pub l_min_leg_px: f64,
    /// Maximum angle (degrees) between the two legs of a V.
    pub v_max_angle_deg: f64,
    /// Minimum leg length (px) of a V.
    pub v_min_leg_px: f64,
    /// Minimum minor/major axis ratio of a diagonal V leg.
    pub v_diagonal_ratio_min: f64,
    /// Dead zone (px) between the V vertex and the endpoints' heights.
    pub v_vertex_margin_px: f64,
    /// Whether checkmark chains include the relaxed V detector.
    pub v_relaxed: bool,
    /// Pointer moves closer than this (px) to the last sample are dropped.
    pub sample_min_px: f64,
    /// Maximum number of samples recorded per gesture.
    pub max_points: usize,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_segment_px: 20.0,
            min_total_px: 60.0,
            max_time_ms: 1500.0,
            cardinal_tolerance_deg: 30.0,
            l_min_leg_px: 35.0,
            v_max_angle_deg: 140.0,
            v_min_leg_px: 50.0,
            v_diagonal_ratio_min: 0.25,
            v_vertex_margin_px: 18.0,
            v_relaxed: true,
            sample_min_px: 4.0,
            max_points: 512,
        }
    }
}

/// Named threshold bundles offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Short, quick strokes register; tighter axis tolerance.
    Sensitive,
    /// The defaults.
    Balanced,
    /// Longer, deliberate strokes only; relaxed V detection off.
    Stable,
}

/// Clamp range of a user-editable parameter.
struct Bounds {
    name: &'static str,
    min: f64,
    max: f64,
}

const MIN_SEGMENT_PX: Bounds = Bounds::new("minSegmentPx", 5.0, 200.0);
const MIN_TOTAL_PX: Bounds = Bounds::new("minTotalPx", 10.0, 400.0);
const MAX_TIME_MS: Bounds = Bounds::new("maxTimeMs", 200.0, 5000.0);
const CARDINAL_TOLERANCE_DEG: Bounds = Bounds::new("cardinalToleranceDeg", 5.0, 60.0);
const L_MIN_LEG_PX: Bounds = Bounds::new("lMinLegPx", 10.0, 400.0);
const V_MAX_ANGLE_DEG: Bounds = Bounds::new("vMaxAngleDeg", 30.0, 160.0);
const V_MIN_LEG_PX: Bounds = Bounds::new("vMinLegPx", 10.0, 400.0);

impl Bounds {
    const fn new(name: &'static str, min: f64, max: f64) -> Self {
        Self { name, min, max }
    }

    fn clamp(&self, value: f64, fallback: f64) -> f64 {
        if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            fallback
        }
    }

    fn check(&self, value: f64) -> std::result::Result<(), ConfigError> {
        check_range(self.name, value, self.min, self.max)
    }
}

fn check_range(
    parameter: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> std::result::Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { parameter });
    }
    if value < min || value > max {
        return Err(ConfigError::ParameterOutOfRange {
            parameter,
            value,
            min,
            max,
        });
    }
    Ok(())
}

impl GestureConfig {
    /// Returns the thresholds of a named preset.
    ///
    /// Parameters a preset does not tune keep their defaults.
    #[must_use]
    pub fn preset(preset: Preset) -> Self {
        let base = Self::default();
        match preset {
            Preset::Balanced => base,
            Preset::Sensitive => Self {
                min_segment_px: 14.0,
                min_total_px: 44.0,
                max_time_ms: 1100.0,
                cardinal_tolerance_deg: 22.0,
                l_min_leg_px: 28.0,
                v_max_angle_deg: 120.0,
                v_min_leg_px: 40.0,
                v_relaxed: true,
                ..base
            },
            Preset::Stable => Self {
                min_segment_px: 26.0,
                min_total_px: 82.0,
                max_time_ms: 1800.0,
                cardinal_tolerance_deg: 18.0,
                l_min_leg_px: 44.0,
                v_max_angle_deg: 112.0,
                v_min_leg_px: 66.0,
                v_relaxed: false,
                ..base
            },
        }
    }

    /// Parses a stored JSON object, filling missing keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if the text is not a JSON object of the
    /// expected shape.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ConfigError::Json(e).into())
    }

    /// Serializes the snapshot to a JSON object with camelCase keys.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ConfigError::Json(e).into())
    }

    /// Clamps the user-editable thresholds into their allowed ranges.
    ///
    /// Non-finite values revert to the default.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            min_segment_px: MIN_SEGMENT_PX.clamp(self.min_segment_px, d.min_segment_px),
            min_total_px: MIN_TOTAL_PX.clamp(self.min_total_px, d.min_total_px),
            max_time_ms: MAX_TIME_MS.clamp(self.max_time_ms, d.max_time_ms),
            cardinal_tolerance_deg: CARDINAL_TOLERANCE_DEG
                .clamp(self.cardinal_tolerance_deg, d.cardinal_tolerance_deg),
            l_min_leg_px: L_MIN_LEG_PX.clamp(self.l_min_leg_px, d.l_min_leg_px),
            v_max_angle_deg: V_MAX_ANGLE_DEG.clamp(self.v_max_angle_deg, d.v_max_angle_deg),
            v_min_leg_px: V_MIN_LEG_PX.clamp(self.v_min_leg_px, d.v_min_leg_px),
            ..self
        }
    }

    /// Checks every threshold without modifying it.
    ///
    /// # Errors
    ///
    /// Returns the first parameter found non-finite or outside its range.
    pub fn validate(&self) -> Result<()> {
        MIN_SEGMENT_PX.check(self.min_segment_px)?;
        MIN_TOTAL_PX.check(self.min_total_px)?;
        MAX_TIME_MS.check(self.max_time_ms)?;
        CARDINAL_TOLERANCE_DEG.check(self.cardinal_tolerance_deg)?;
        L_MIN_LEG_PX.check(self.l_min_leg_px)?;
        V_MAX_ANGLE_DEG.check(self.v_max_angle_deg)?;
        V_MIN_LEG_PX.check(self.v_min_leg_px)?;
        check_range(
            "vDiagonalRatioMin",
            self.v_diagonal_ratio_min,
            f64::MIN_POSITIVE,
            1.0,
        )?;
        check_range("vVertexMarginPx", self.v_vertex_margin_px, 0.0, f64::MAX)?;
        check_range("sampleMinPx", self.sample_min_px, 0.0, f64::MAX)?;
        if self.max_points < 2 {
            #[allow(clippy::cast_precision_loss)]
            let value = self.max_points as f64;
            return Err(ConfigError::ParameterOutOfRange {
                parameter: "maxPoints",
                value,
                min: 2.0,
                max: f64::MAX,
            }
            .into());
        }
        Ok(())
    }
}
