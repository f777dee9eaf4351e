//! Evaluation-boundary errors.

use super::measurement_error::MeasurementError;
use super::scoring_error::ScoringError;
use crate::types::pattern::GeometricPattern;

/// Umbrella error returned by `ComplianceEngine::evaluate`.
///
/// All variants are recoverable at the evaluation boundary: the calling
/// layer translates them into a user-visible error response. A failed
/// evaluation never appends to history.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("invalid measurement for pattern {pattern}: {source}")]
    InvalidMeasurement {
        pattern: GeometricPattern,
        source: MeasurementError,
    },

    #[error("duplicate measurement for pattern {pattern}")]
    DuplicateMeasurement { pattern: GeometricPattern },

    #[error("no usable measurements remain after excluding failed patterns")]
    NoUsableMeasurements,

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
