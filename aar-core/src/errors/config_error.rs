//! Configuration loader errors. Configuration-time, fatal.

use super::threshold_error::ThresholdConfigError;
use super::weight_error::WeightConfigError;

/// Errors from loading and validating the engine configuration.
///
/// All variants block startup: an engine is never constructed from a
/// configuration that failed validation (fail-fast, not fail-per-request).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid config value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error(transparent)]
    Weights(#[from] WeightConfigError),

    #[error(transparent)]
    Thresholds(#[from] ThresholdConfigError),
}
