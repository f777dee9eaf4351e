//! Threshold bands as read from `aar.toml`.

use serde::{Deserialize, Serialize};

use crate::errors::ThresholdConfigError;
use crate::types::level::ComplianceLevel;
use crate::types::thresholds::{Band, ThresholdSet};

/// One raw band entry: level name plus its score interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandConfig {
    pub level: String,
    pub min: f64,
    pub max: f64,
}

/// Raw threshold configuration. Empty bands mean the compiled defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThresholdConfig {
    pub bands: Vec<BandConfig>,
}

impl ThresholdConfig {
    /// Resolve level names and validate the partition.
    pub fn build_set(&self) -> Result<ThresholdSet, ThresholdConfigError> {
        if self.bands.is_empty() {
            return Ok(ThresholdSet::default_bands());
        }
        let bands = self
            .bands
            .iter()
            .map(|b| {
                let level = ComplianceLevel::from_name(&b.level).ok_or_else(|| {
                    ThresholdConfigError::UnknownLevel {
                        name: b.level.clone(),
                    }
                })?;
                Ok(Band {
                    level,
                    min: b.min,
                    max: b.max,
                })
            })
            .collect::<Result<Vec<_>, ThresholdConfigError>>()?;
        ThresholdSet::from_bands(bands)
    }
}
