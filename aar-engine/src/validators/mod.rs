//! Pattern validators — five pure, deterministic measurement checks.
//!
//! Each validator maps one measurement shape to a confidence in [0,1].
//! Dispatch is an exhaustive match over the closed measurement enum, so a
//! sixth pattern is a compile-time concern at this site.

pub mod circle;
pub mod fractal;
pub mod golden_ratio;
pub mod spiral;
pub mod triangle;

use aar_core::errors::MeasurementError;
use aar_core::types::{PatternMeasurement, PatternResult};

/// Validate one measurement against its pattern.
///
/// Pure function: identical measurements always yield identical results.
/// Shape violations are `MeasurementError`; a structurally degenerate but
/// well-shaped measurement yields a zero-confidence result instead.
pub fn validate(measurement: &PatternMeasurement) -> Result<PatternResult, MeasurementError> {
    match measurement {
        PatternMeasurement::Circle {
            closure_error,
            radius,
        } => circle::validate(*closure_error, *radius),
        PatternMeasurement::Triangle { loads } => triangle::validate(loads),
        PatternMeasurement::Spiral { radii } => spiral::validate(radii),
        PatternMeasurement::GoldenRatio { major, minor } => {
            golden_ratio::validate(*major, *minor)
        }
        PatternMeasurement::Fractal { similarities } => fractal::validate(similarities),
    }
}

/// Require a finite value for a named field.
pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<(), MeasurementError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MeasurementError::NonFinite { field })
    }
}

/// Require a finite, strictly positive value for a named field.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), MeasurementError> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(MeasurementError::NonPositive { field, value })
    }
}
