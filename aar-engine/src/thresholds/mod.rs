//! Threshold classification and alert evaluation.

pub mod advisory;

use aar_core::config::ThresholdConfig;
use aar_core::errors::ThresholdConfigError;
use aar_core::types::{Alert, ComplianceLevel, ThresholdSet};

/// Classifies scores into levels and decides when alerts fire.
///
/// Alert policy: a level *change* fires exactly one alert, and Critical
/// fires on every evaluation regardless of the previous level. Routine
/// fluctuation within a non-Critical level is silent; presence in Critical
/// never is. The first-ever evaluation of a subject alerts only when it
/// lands in Critical.
pub struct ThresholdManager {
    set: ThresholdSet,
}

impl ThresholdManager {
    /// Build a manager from raw configuration, validating the partition.
    pub fn from_config(config: &ThresholdConfig) -> Result<Self, ThresholdConfigError> {
        Ok(Self {
            set: config.build_set()?,
        })
    }

    /// Manager over the default band partition.
    pub fn with_defaults() -> Self {
        Self {
            set: ThresholdSet::default_bands(),
        }
    }

    /// Manager over an already-validated threshold set.
    pub fn new(set: ThresholdSet) -> Self {
        Self { set }
    }

    /// Classify a score. Pure lookup, defined for every score in [0,1].
    pub fn classify(&self, score: f64) -> ComplianceLevel {
        self.set.classify(score)
    }

    /// Decide whether this evaluation raises an alert.
    pub fn evaluate(
        &self,
        subject_id: &str,
        score: f64,
        previous_level: Option<ComplianceLevel>,
        timestamp: i64,
    ) -> Option<Alert> {
        let level = self.classify(score);
        let crossed = previous_level != Some(level);

        if level == ComplianceLevel::Critical {
            // Critical is never silent, crossed or not.
            return Some(self.alert(subject_id, score, level, timestamp));
        }
        if crossed && previous_level.is_some() {
            return Some(self.alert(subject_id, score, level, timestamp));
        }
        None
    }

    /// The validated band partition in use.
    pub fn thresholds(&self) -> &ThresholdSet {
        &self.set
    }

    fn alert(
        &self,
        subject_id: &str,
        score: f64,
        level: ComplianceLevel,
        timestamp: i64,
    ) -> Alert {
        let message = match level {
            ComplianceLevel::Critical => format!(
                "critical compliance {:.1}% — immediate intervention required",
                score * 100.0
            ),
            ComplianceLevel::Warning => format!(
                "compliance dropped to warning at {:.1}% — review needed",
                score * 100.0
            ),
            _ => format!("compliance level changed to {} at {:.1}%", level, score * 100.0),
        };
        Alert {
            level,
            score,
            subject_id: subject_id.to_string(),
            timestamp,
            message,
        }
    }
}

impl Default for ThresholdManager {
    fn default() -> Self {
        Self::with_defaults()
    }
}
