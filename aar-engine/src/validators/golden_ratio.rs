//! Golden ratio — proportions tested against φ.

use aar_core::errors::MeasurementError;
use aar_core::types::{GeometricPattern, PatternResult, PHI};

use super::require_positive;

/// Confidence is 1.0 minus the normalized absolute difference between the
/// measured ratio and φ, clamped to [0,1]. φ is the fixed constant
/// [`PHI`], never recomputed; a ratio of exactly φ scores exactly 1.0.
pub fn validate(major: f64, minor: f64) -> Result<PatternResult, MeasurementError> {
    require_positive("major", major)?;
    require_positive("minor", minor)?;

    let ratio = major / minor;
    let confidence = (1.0 - (ratio - PHI).abs() / PHI).clamp(0.0, 1.0);

    Ok(PatternResult::new(
        GeometricPattern::GoldenRatio,
        confidence,
        format!("ratio {:.9} against phi {:.9}", ratio, PHI),
    ))
}
