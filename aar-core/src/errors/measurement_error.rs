//! Measurement shape errors.

/// A measurement does not match the shape its pattern requires.
///
/// Local to one pattern check: under the renormalize policy the pattern is
/// recorded as a failed validation and the evaluation continues; under the
/// require-complete policy the whole evaluation fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeasurementError {
    #[error("field {field} is not a finite number")]
    NonFinite { field: &'static str },

    #[error("field {field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("field {field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("field {field} needs at least {required} values, got {actual}")]
    WrongArity {
        field: &'static str,
        required: usize,
        actual: usize,
    },
}
