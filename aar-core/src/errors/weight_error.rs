//! Weight configuration errors. Configuration-time, fatal.

use crate::types::pattern::GeometricPattern;

/// A weight table failed validation at configuration-load time.
/// Never raised at scoring time: scorers only see validated tables.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightConfigError {
    #[error("weight table is empty")]
    EmptyTable,

    #[error("weight for pattern {pattern} is not finite")]
    NonFiniteWeight { pattern: GeometricPattern },

    #[error("weight for pattern {pattern} is negative: {weight}")]
    NegativeWeight {
        pattern: GeometricPattern,
        weight: f64,
    },

    #[error("weights must sum to 1.0, got {sum}")]
    BadSum { sum: f64 },

    #[error("unknown pattern name {name:?} in weight table for context {context:?}")]
    UnknownPattern { context: String, name: String },
}
