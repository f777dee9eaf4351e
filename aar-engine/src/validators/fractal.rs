//! Fractal — self-similarity across scales.

use aar_core::errors::MeasurementError;
use aar_core::types::{GeometricPattern, PatternResult};

use super::require_finite;

/// Minimum number of similarity coefficients: variance over a single scale
/// is undefined.
const MIN_SCALES: usize = 2;

/// Maximum possible population variance for values confined to [0,1]
/// (attained by half the mass at 0 and half at 1).
const MAX_SIMILARITY_VARIANCE: f64 = 0.25;

/// Confidence measures how stable the self-similarity metric stays across
/// resampled scales: 1.0 minus the variance of the coefficients normalized
/// by [`MAX_SIMILARITY_VARIANCE`], clamped to [0,1]. Zero variance — the
/// structure looks the same at every scale — scores exactly 1.0.
pub fn validate(similarities: &[f64]) -> Result<PatternResult, MeasurementError> {
    if similarities.len() < MIN_SCALES {
        return Err(MeasurementError::WrongArity {
            field: "similarities",
            required: MIN_SCALES,
            actual: similarities.len(),
        });
    }
    for &s in similarities {
        require_finite("similarities", s)?;
        if !(0.0..=1.0).contains(&s) {
            return Err(MeasurementError::OutOfRange {
                field: "similarities",
                value: s,
                min: 0.0,
                max: 1.0,
            });
        }
    }

    let n = similarities.len() as f64;
    let mean = similarities.iter().sum::<f64>() / n;
    let variance = similarities.iter().map(|&s| (s - mean).powi(2)).sum::<f64>() / n;
    let confidence = (1.0 - variance / MAX_SIMILARITY_VARIANCE).clamp(0.0, 1.0);

    Ok(PatternResult::new(
        GeometricPattern::Fractal,
        confidence,
        format!(
            "similarity variance {:.6} across {} scales",
            variance,
            similarities.len()
        ),
    ))
}
