//! Error handling for the AAR compliance engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod evaluation_error;
pub mod measurement_error;
pub mod scoring_error;
pub mod threshold_error;
pub mod weight_error;

pub use config_error::ConfigError;
pub use evaluation_error::EvaluationError;
pub use measurement_error::MeasurementError;
pub use scoring_error::ScoringError;
pub use threshold_error::ThresholdConfigError;
pub use weight_error::WeightConfigError;
