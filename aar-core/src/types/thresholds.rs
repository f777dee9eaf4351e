//! Validated threshold bands partitioning [0,1] into compliance levels.

use serde::{Deserialize, Serialize};

use super::level::ComplianceLevel;
use crate::errors::ThresholdConfigError;

/// Tolerance for band boundary contiguity checks.
const BOUNDARY_TOLERANCE: f64 = 1e-12;

/// One half-open score interval `[min, max)` bound to a level.
/// The final band is closed at 1.0 so the partition covers all of [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub level: ComplianceLevel,
    pub min: f64,
    pub max: f64,
}

/// A validated, total, non-overlapping partition of [0,1].
///
/// Construction is the only validation point; `classify` is a pure lookup
/// that is defined for every score in [0,1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    bands: Vec<Band>,
}

impl ThresholdSet {
    /// Build a threshold set from bands, rejecting gaps, overlaps, partial
    /// coverage, duplicate levels, and level/score-order mismatches.
    pub fn from_bands(mut bands: Vec<Band>) -> Result<Self, ThresholdConfigError> {
        if bands.len() != ComplianceLevel::ALL.len() {
            return Err(ThresholdConfigError::WrongBandCount {
                expected: ComplianceLevel::ALL.len(),
                actual: bands.len(),
            });
        }
        bands.sort_by(|a, b| a.min.total_cmp(&b.min));

        for band in &bands {
            if !band.min.is_finite() || !band.max.is_finite() {
                return Err(ThresholdConfigError::NonFiniteBoundary { level: band.level });
            }
            if band.min >= band.max {
                return Err(ThresholdConfigError::EmptyBand { level: band.level });
            }
        }

        // Worst level owns the lowest band, and so on upward.
        for (band, expected) in bands.iter().zip(ComplianceLevel::ALL) {
            if band.level != expected {
                return Err(ThresholdConfigError::LevelOrderMismatch {
                    expected,
                    actual: band.level,
                });
            }
        }

        if bands[0].min.abs() > BOUNDARY_TOLERANCE {
            return Err(ThresholdConfigError::Gap {
                from: 0.0,
                to: bands[0].min,
            });
        }
        let last = bands[bands.len() - 1];
        if (last.max - 1.0).abs() > BOUNDARY_TOLERANCE {
            return Err(ThresholdConfigError::Gap {
                from: last.max,
                to: 1.0,
            });
        }
        for pair in bands.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if (lo.max - hi.min).abs() > BOUNDARY_TOLERANCE {
                if lo.max < hi.min {
                    return Err(ThresholdConfigError::Gap {
                        from: lo.max,
                        to: hi.min,
                    });
                }
                return Err(ThresholdConfigError::Overlap {
                    lower: lo.level,
                    upper: hi.level,
                });
            }
        }

        Ok(Self { bands })
    }

    /// The default partition: Critical [0,0.5), Warning [0.5,0.7),
    /// Good [0.7,0.9), Excellent [0.9,1.0].
    pub fn default_bands() -> Self {
        Self {
            bands: vec![
                Band {
                    level: ComplianceLevel::Critical,
                    min: 0.0,
                    max: 0.5,
                },
                Band {
                    level: ComplianceLevel::Warning,
                    min: 0.5,
                    max: 0.7,
                },
                Band {
                    level: ComplianceLevel::Good,
                    min: 0.7,
                    max: 0.9,
                },
                Band {
                    level: ComplianceLevel::Excellent,
                    min: 0.9,
                    max: 1.0,
                },
            ],
        }
    }

    /// Classify a score into its level. Pure lookup, defined on all of [0,1];
    /// out-of-range inputs are clamped to absorb floating-point drift.
    pub fn classify(&self, score: f64) -> ComplianceLevel {
        let score = if score.is_finite() {
            score.clamp(0.0, 1.0)
        } else {
            0.0
        };
        for band in &self.bands {
            if score >= band.min && score < band.max {
                return band.level;
            }
        }
        // score == 1.0 (the closed upper boundary of the final band).
        self.bands[self.bands.len() - 1].level
    }

    /// The validated bands, ordered by score.
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self::default_bands()
    }
}
