//! Top-level AAR engine configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EvaluationConfig, ThresholdConfig, TrendConfig, WeightConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Caller overrides (applied via `apply_cli_overrides`)
/// 2. Environment variables (`AAR_*`)
/// 3. Project config (`aar.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AarConfig {
    pub weights: WeightConfig,
    pub thresholds: ThresholdConfig,
    pub trend: TrendConfig,
    pub evaluation: EvaluationConfig,
}

/// Caller override arguments that can be applied on top of a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub trend_window: Option<usize>,
    pub trend_epsilon: Option<f64>,
    pub on_invalid_measurement: Option<String>,
}

impl AarConfig {
    /// Load configuration with layered resolution and validate it.
    ///
    /// Invalid configuration is rejected here, before any evaluation runs.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("aar.toml");
        if project_config_path.exists() {
            let content = std::fs::read_to_string(&project_config_path).map_err(|_| {
                ConfigError::FileNotFound {
                    path: project_config_path.display().to_string(),
                }
            })?;
            let file_config: AarConfig =
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                })?;
            Self::merge(&mut config, &file_config);
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        config.validate()?;

        tracing::debug!(
            window = config.trend.effective_window(),
            epsilon = config.trend.effective_epsilon(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: AarConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every sub-config. Fail-fast: a config that does not pass
    /// here never reaches the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.build_tables()?;
        self.thresholds.build_set()?;
        self.evaluation.effective_policy()?;

        if let Some(window) = self.trend.window {
            if window == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "trend.window".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(epsilon) = self.trend.epsilon {
            if !epsilon.is_finite() || epsilon < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "trend.epsilon".to_string(),
                    message: "must be a finite non-negative number".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values win when present.
    fn merge(base: &mut AarConfig, other: &AarConfig) {
        if other.weights.default.is_some() {
            base.weights.default = other.weights.default.clone();
        }
        if !other.weights.overrides.is_empty() {
            base.weights.overrides = other.weights.overrides.clone();
        }
        if !other.thresholds.bands.is_empty() {
            base.thresholds.bands = other.thresholds.bands.clone();
        }
        if other.trend.window.is_some() {
            base.trend.window = other.trend.window;
        }
        if other.trend.epsilon.is_some() {
            base.trend.epsilon = other.trend.epsilon;
        }
        if other.trend.stale_after_secs.is_some() {
            base.trend.stale_after_secs = other.trend.stale_after_secs;
        }
        if other.evaluation.on_invalid_measurement.is_some() {
            base.evaluation.on_invalid_measurement =
                other.evaluation.on_invalid_measurement.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `AAR_TREND_WINDOW`, `AAR_TREND_EPSILON`, etc.
    fn apply_env_overrides(config: &mut AarConfig) {
        if let Ok(val) = std::env::var("AAR_TREND_WINDOW") {
            if let Ok(v) = val.parse::<usize>() {
                config.trend.window = Some(v);
            }
        }
        if let Ok(val) = std::env::var("AAR_TREND_EPSILON") {
            if let Ok(v) = val.parse::<f64>() {
                config.trend.epsilon = Some(v);
            }
        }
        if let Ok(val) = std::env::var("AAR_TREND_STALE_AFTER_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.trend.stale_after_secs = Some(v);
            }
        }
        if let Ok(val) = std::env::var("AAR_EVALUATION_ON_INVALID_MEASUREMENT") {
            config.evaluation.on_invalid_measurement = Some(val);
        }
    }

    /// Apply caller overrides (highest priority).
    fn apply_cli_overrides(config: &mut AarConfig, cli: &CliOverrides) {
        if let Some(v) = cli.trend_window {
            config.trend.window = Some(v);
        }
        if let Some(v) = cli.trend_epsilon {
            config.trend.epsilon = Some(v);
        }
        if let Some(ref v) = cli.on_invalid_measurement {
            config.evaluation.on_invalid_measurement = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
