//! Threshold configuration errors. Configuration-time, fatal.

use crate::types::level::ComplianceLevel;

/// A threshold band set is not a total, non-overlapping partition of [0,1].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThresholdConfigError {
    #[error("expected {expected} bands (one per level), got {actual}")]
    WrongBandCount { expected: usize, actual: usize },

    #[error("band for level {level} has a non-finite boundary")]
    NonFiniteBoundary { level: ComplianceLevel },

    #[error("band for level {level} is empty (min >= max)")]
    EmptyBand { level: ComplianceLevel },

    #[error("bands leave a gap between {from} and {to}")]
    Gap { from: f64, to: f64 },

    #[error("bands for {lower} and {upper} overlap")]
    Overlap {
        lower: ComplianceLevel,
        upper: ComplianceLevel,
    },

    #[error("band order does not follow level order: expected {expected}, got {actual}")]
    LevelOrderMismatch {
        expected: ComplianceLevel,
        actual: ComplianceLevel,
    },

    #[error("unknown level name {name:?} in threshold bands")]
    UnknownLevel { name: String },
}
