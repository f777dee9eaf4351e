//! Spiral — monotonic growth at a consistent rate.

use aar_core::errors::MeasurementError;
use aar_core::types::{GeometricPattern, PatternResult};

use super::require_positive;

/// Minimum number of terms: two successive ratios are needed before growth
/// consistency means anything.
const MIN_TERMS: usize = 3;

/// Confidence is the product of two factors, clamped to [0,1]:
/// the fraction of successive ratios that actually grow (> 1), and growth
/// consistency (1 minus the coefficient of variation of the ratios).
/// A perfect geometric progression with common ratio above 1 scores 1.0.
pub fn validate(radii: &[f64]) -> Result<PatternResult, MeasurementError> {
    if radii.len() < MIN_TERMS {
        return Err(MeasurementError::WrongArity {
            field: "radii",
            required: MIN_TERMS,
            actual: radii.len(),
        });
    }
    for &r in radii {
        require_positive("radii", r)?;
    }

    let ratios: Vec<f64> = radii.windows(2).map(|w| w[1] / w[0]).collect();
    let growing = ratios.iter().filter(|&&r| r > 1.0).count();
    let growth_fraction = growing as f64 / ratios.len() as f64;

    let mean = ratios.iter().sum::<f64>() / ratios.len() as f64;
    let variance = ratios.iter().map(|&r| (r - mean).powi(2)).sum::<f64>() / ratios.len() as f64;
    let consistency = (1.0 - variance.sqrt() / mean).clamp(0.0, 1.0);

    let confidence = (growth_fraction * consistency).clamp(0.0, 1.0);

    Ok(PatternResult::new(
        GeometricPattern::Spiral,
        confidence,
        format!(
            "{}/{} growing ratios, mean growth factor {:.6}",
            growing,
            ratios.len(),
            mean
        ),
    ))
}
