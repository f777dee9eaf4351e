//! Raw measurement shapes, one per pattern.

use serde::{Deserialize, Serialize};

use super::pattern::GeometricPattern;

/// The raw numeric input for one pattern check.
///
/// Each variant defines the measurement shape its pattern requires; shape
/// violations (wrong arity, non-finite numbers, non-positive reference
/// magnitudes) are rejected by the validators, not silently absorbed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pattern", rename_all = "snake_case")]
pub enum PatternMeasurement {
    /// Closure error of a traverse around a circuit with reference radius.
    Circle { closure_error: f64, radius: f64 },
    /// Load measurements at the three supports of a triangular structure.
    Triangle { loads: [f64; 3] },
    /// Ordered growth measurements along a spiral arm (at least 3 terms).
    Spiral { radii: Vec<f64> },
    /// Two magnitudes whose ratio is tested against φ.
    GoldenRatio { major: f64, minor: f64 },
    /// Self-similarity coefficients in [0,1] across resampled scales
    /// (at least 2 values).
    Fractal { similarities: Vec<f64> },
}

impl PatternMeasurement {
    /// The pattern this measurement belongs to.
    pub fn pattern(&self) -> GeometricPattern {
        match self {
            Self::Circle { .. } => GeometricPattern::Circle,
            Self::Triangle { .. } => GeometricPattern::Triangle,
            Self::Spiral { .. } => GeometricPattern::Spiral,
            Self::GoldenRatio { .. } => GeometricPattern::GoldenRatio,
            Self::Fractal { .. } => GeometricPattern::Fractal,
        }
    }
}
