//! The closed set of Sacred Geometry patterns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The golden ratio constant φ. Fixed, never recomputed.
pub const PHI: f64 = 1.618033988749895;

/// One of the five canonical geometric validation patterns.
///
/// The set is closed: adding a sixth pattern is a compile-time concern
/// (every `match` over this enum is exhaustive, so new variants surface as
/// build errors at each dispatch site, not as runtime lookup misses).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum GeometricPattern {
    /// Closure: a complete circuit returns to its origin.
    Circle,
    /// Structural stability across three balanced supports.
    Triangle,
    /// Monotonic growth at a consistent rate.
    Spiral,
    /// Proportions tested against φ.
    GoldenRatio,
    /// Self-similarity across scales.
    Fractal,
}

impl GeometricPattern {
    /// All five patterns, in canonical order.
    pub const ALL: [GeometricPattern; 5] = [
        GeometricPattern::Circle,
        GeometricPattern::Triangle,
        GeometricPattern::Spiral,
        GeometricPattern::GoldenRatio,
        GeometricPattern::Fractal,
    ];

    /// Pattern name as used in configuration files and wire formats.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Spiral => "spiral",
            Self::GoldenRatio => "golden_ratio",
            Self::Fractal => "fractal",
        }
    }

    /// Look up a pattern by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for GeometricPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for unrecognized pattern names at boundary layers.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown pattern name: {name}")]
pub struct ParsePatternError {
    pub name: String,
}

impl FromStr for GeometricPattern {
    type Err = ParsePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParsePatternError {
            name: s.to_string(),
        })
    }
}

/// Parse a list of pattern names, rejecting the first unknown one.
///
/// Boundary layers receive pattern selections as strings; the engine only
/// ever works with the closed enum.
pub fn parse_patterns(names: &[&str]) -> Result<Vec<GeometricPattern>, ParsePatternError> {
    names.iter().map(|n| n.parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_names_round_trip() {
        for pattern in GeometricPattern::ALL {
            assert_eq!(GeometricPattern::from_name(pattern.name()), Some(pattern));
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = "hexagon".parse::<GeometricPattern>().unwrap_err();
        assert_eq!(err.name, "hexagon");
    }

    #[test]
    fn test_parse_patterns_all_known() {
        let parsed = parse_patterns(&["circle", "golden_ratio"]).unwrap();
        assert_eq!(
            parsed,
            vec![GeometricPattern::Circle, GeometricPattern::GoldenRatio]
        );
    }

    #[test]
    fn test_phi_constant_sane() {
        // φ satisfies φ² = φ + 1.
        assert!((PHI * PHI - PHI - 1.0).abs() < 1e-12);
    }
}
