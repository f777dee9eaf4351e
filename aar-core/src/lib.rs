//! Core types, errors, configuration, events, and telemetry for the AAR
//! Sacred Geometry compliance engine.
//!
//! This crate carries no algorithmic content. The engine proper lives in
//! `aar-engine`; everything here is the shared vocabulary: the closed pattern
//! set, measurement shapes, scores, levels, records, the error taxonomy, the
//! fail-fast configuration loader, and the event system that carries alerts
//! and evaluation results to external collaborators.

pub mod config;
pub mod errors;
pub mod events;
pub mod telemetry;
pub mod time;
pub mod traits;
pub mod types;

pub use errors::{
    ConfigError, EvaluationError, MeasurementError, ScoringError, ThresholdConfigError,
    WeightConfigError,
};
pub use types::{
    Alert, ComplianceLevel, ComplianceRecord, ComplianceScore, GeometricPattern,
    PatternMeasurement, PatternResult, ThresholdSet, TrendDirection, TrendSummary, WeightTable,
    PHI,
};
