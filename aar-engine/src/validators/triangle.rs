//! Triangle — structural stability across three supports.

use aar_core::errors::MeasurementError;
use aar_core::types::{GeometricPattern, PatternResult};

use super::require_finite;

/// Confidence reflects how evenly the three supports share load: 1.0 minus
/// the coefficient of variation of the loads, clamped to [0,1]. A degenerate
/// configuration (non-positive loads) is a valid measurement of a broken
/// structure and scores 0.0 rather than erroring.
pub fn validate(loads: &[f64; 3]) -> Result<PatternResult, MeasurementError> {
    for &load in loads {
        require_finite("loads", load)?;
    }

    let mean = loads.iter().sum::<f64>() / 3.0;
    if mean <= 0.0 || loads.iter().any(|&l| l <= 0.0) {
        return Ok(PatternResult::new(
            GeometricPattern::Triangle,
            0.0,
            "degenerate support configuration",
        ));
    }

    let variance = loads.iter().map(|&l| (l - mean).powi(2)).sum::<f64>() / 3.0;
    let cv = variance.sqrt() / mean;
    let confidence = (1.0 - cv).clamp(0.0, 1.0);

    Ok(PatternResult::new(
        GeometricPattern::Triangle,
        confidence,
        format!("load imbalance {:.6} around mean {:.6}", cv, mean),
    ))
}
