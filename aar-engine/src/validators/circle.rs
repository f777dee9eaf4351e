//! Circle — closure of a complete circuit.

use aar_core::errors::MeasurementError;
use aar_core::types::{GeometricPattern, PatternResult};

use super::{require_finite, require_positive};

/// Confidence is 1.0 minus the closure error normalized by the reference
/// radius, clamped to [0,1]. A circuit that returns exactly to its origin
/// scores 1.0.
pub fn validate(closure_error: f64, radius: f64) -> Result<PatternResult, MeasurementError> {
    require_finite("closure_error", closure_error)?;
    require_positive("radius", radius)?;

    let deviation = closure_error.abs() / radius;
    let confidence = (1.0 - deviation).clamp(0.0, 1.0);

    Ok(PatternResult::new(
        GeometricPattern::Circle,
        confidence,
        format!("closure error {:.6} over radius {:.6}", closure_error.abs(), radius),
    ))
}
