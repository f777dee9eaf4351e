//! Scoring errors. Raised at scoring time, propagated to the caller.

use crate::types::pattern::GeometricPattern;

/// The result set handed to the scorer does not cover the weight table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("pattern {pattern} is weighted but has no result")]
    IncompletePatternSet { pattern: GeometricPattern },
}
