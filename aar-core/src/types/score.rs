//! Per-pattern results and the aggregated compliance score.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::pattern::GeometricPattern;
use super::weights::WeightTable;
use crate::errors::MeasurementError;

/// Outcome of one pattern check. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternResult {
    pub pattern: GeometricPattern,
    /// Confidence in [0,1].
    pub confidence: f64,
    /// Free-form diagnostic text.
    pub detail: String,
}

impl PatternResult {
    /// Build a result, clamping the confidence into [0,1].
    pub fn new(pattern: GeometricPattern, confidence: f64, detail: impl Into<String>) -> Self {
        Self {
            pattern,
            confidence: confidence.clamp(0.0, 1.0),
            detail: detail.into(),
        }
    }

    /// Marker result for a pattern whose measurement failed validation.
    /// Carries zero confidence and the rejection reason as detail.
    pub fn failed(pattern: GeometricPattern, error: &MeasurementError) -> Self {
        Self {
            pattern,
            confidence: 0.0,
            detail: format!("validation failed: {error}"),
        }
    }
}

/// The aggregated evaluation result. Produced once per evaluation, never
/// mutated.
///
/// Invariants (enforced at construction sites, relied on everywhere):
/// `overall` ∈ [0,1] and equals the weighted arithmetic mean of
/// `breakdown[*].confidence` over the patterns `weights_used` references,
/// within floating tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceScore {
    pub overall: f64,
    /// Inline up to the full five-pattern set — one result per checked
    /// pattern, including failed-validation markers.
    pub breakdown: SmallVec<[PatternResult; 5]>,
    pub weights_used: WeightTable,
}

impl ComplianceScore {
    /// Result for a single pattern, if present in the breakdown.
    pub fn result_for(&self, pattern: GeometricPattern) -> Option<&PatternResult> {
        self.breakdown.iter().find(|r| r.pattern == pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_confidence_clamped() {
        let r = PatternResult::new(GeometricPattern::Circle, 1.2, "over");
        assert_eq!(r.confidence, 1.0);
        let r = PatternResult::new(GeometricPattern::Circle, -0.3, "under");
        assert_eq!(r.confidence, 0.0);
    }

    #[test]
    fn test_failed_result_zero_confidence() {
        let err = MeasurementError::NonFinite { field: "radius" };
        let r = PatternResult::failed(GeometricPattern::Circle, &err);
        assert_eq!(r.confidence, 0.0);
        assert!(r.detail.contains("validation failed"));
    }
}
