//! Evaluation policy configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// How the engine treats a measurement that fails shape validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementPolicy {
    /// Record the pattern as a failed validation, exclude it from the
    /// weighted sum, and renormalize the remaining weights.
    Renormalize,
    /// Fail the whole evaluation on the first invalid measurement.
    RequireComplete,
}

impl MeasurementPolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "renormalize" => Some(Self::Renormalize),
            "require_complete" => Some(Self::RequireComplete),
            _ => None,
        }
    }
}

/// Raw evaluation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EvaluationConfig {
    /// `"renormalize"` (default) or `"require_complete"`.
    pub on_invalid_measurement: Option<String>,
}

impl EvaluationConfig {
    /// Resolve the configured policy, rejecting unknown values.
    pub fn effective_policy(&self) -> Result<MeasurementPolicy, ConfigError> {
        match &self.on_invalid_measurement {
            None => Ok(MeasurementPolicy::Renormalize),
            Some(name) => MeasurementPolicy::from_name(name).ok_or_else(|| {
                ConfigError::ValidationFailed {
                    field: "evaluation.on_invalid_measurement".to_string(),
                    message: format!(
                        "must be \"renormalize\" or \"require_complete\", got {name:?}"
                    ),
                }
            }),
        }
    }
}
