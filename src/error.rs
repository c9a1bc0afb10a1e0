use thiserror::Error;

/// Top-level error type for the Gestura recognition engine.
///
/// Recognition itself never fails; errors only arise while building the
/// configuration and gesture-map snapshots handed to the recognizer.
#[derive(Debug, Error)]
pub enum GesturaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Map(#[from] MapError),
}

/// Errors related to recognizer configuration snapshots.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} is not a finite number")]
    NotFinite { parameter: &'static str },

    #[error("malformed configuration: {0}")]
    Json(#[source] serde_json::Error),
}

/// Errors related to the gesture-to-action map.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("unknown gesture key: {0:?}")]
    UnknownGesture(String),

    #[error("unknown action: {0:?}")]
    UnknownAction(String),

    #[error("malformed gesture map: {0}")]
    Json(#[source] serde_json::Error),
}

/// Convenience type alias for results using [`GesturaError`].
pub type Result<T> = std::result::Result<T, GesturaError>;
