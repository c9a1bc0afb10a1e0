//! Directional mouse-gesture recognition.
//!
//! Turns a noisy stream of timestamped pointer samples into a discrete
//! gesture key (straight swipe, L-corner, V / inverted V) and resolves it
//! through a [`GestureMap`] to an [`Action`]. Every entry point is a pure
//! function of the point stream, a [`GestureConfig`] snapshot, and a map
//! snapshot; capturing pointer events and performing actions is left to the
//! host.

pub mod action;
pub mod config;
pub mod direction;
pub mod error;
pub mod math;
pub mod recognize;
pub mod stroke;

pub use action::{Action, ActionScope, GestureKey, GestureMap};
pub use config::{GestureConfig, Preset};
pub use direction::{extract_sequences, Direction4, Direction8, DirectionSequences};
pub use error::{ConfigError, GesturaError, MapError, Result};
pub use recognize::{recognize, Classifier, GestureResult, Recognize};
pub use stroke::{PreviewChange, Sample, StrokeRecorder};
