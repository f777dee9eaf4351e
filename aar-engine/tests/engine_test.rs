//! End-to-end tests for the compliance engine.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use aar_core::config::AarConfig;
use aar_core::errors::{EvaluationError, ScoringError};
use aar_core::events::{AarEventHandler, AlertRaisedEvent, EvaluationCompletedEvent};
use aar_core::traits::HistorySource;
use aar_core::types::{
    ComplianceLevel, ComplianceRecord, GeometricPattern, PatternMeasurement, TrendDirection, PHI,
};
use aar_engine::ComplianceEngine;

/// All five measurements at ideal values: zero closure error, balanced
/// triangle, perfect geometric spiral, exact φ, zero-variance fractal.
fn ideal_measurements() -> Vec<PatternMeasurement> {
    vec![
        PatternMeasurement::Circle {
            closure_error: 0.0,
            radius: 10.0,
        },
        PatternMeasurement::Triangle {
            loads: [4.0, 4.0, 4.0],
        },
        PatternMeasurement::Spiral {
            radii: vec![1.0, PHI, PHI * PHI, PHI * PHI * PHI],
        },
        PatternMeasurement::GoldenRatio {
            major: PHI,
            minor: 1.0,
        },
        PatternMeasurement::Fractal {
            similarities: vec![0.9, 0.9, 0.9],
        },
    ]
}

/// Engine whose overall score tracks the circle confidence directly:
/// the weight table references only the circle pattern.
fn circle_only_engine() -> ComplianceEngine {
    let config = AarConfig::from_toml(
        r#"
[weights.default]
circle = 1.0

[trend]
window = 2
"#,
    )
    .unwrap();
    ComplianceEngine::from_config(&config).unwrap()
}

fn circle_measurement(confidence: f64) -> Vec<PatternMeasurement> {
    vec![PatternMeasurement::Circle {
        closure_error: 1.0 - confidence,
        radius: 1.0,
    }]
}

#[test]
fn test_ideal_evaluation_is_excellent_with_no_alert() {
    let engine = ComplianceEngine::with_defaults();
    let outcome = engine
        .evaluate("mission-1", None, &ideal_measurements())
        .unwrap();

    assert!((outcome.score.overall - 1.0).abs() < 1e-9);
    assert_eq!(outcome.level, ComplianceLevel::Excellent);
    assert!(outcome.alert.is_none(), "first excellent record must not alert");
    assert_eq!(outcome.score.breakdown.len(), 5);
    assert_eq!(outcome.trend.window_size, 1);
    assert_eq!(outcome.trend.direction, TrendDirection::Stable);
    assert!(outcome.report_id.starts_with("aar_"));
}

#[test]
fn test_alert_suppression_and_critical_repetition() {
    let engine = circle_only_engine();
    let subject = "mission-2";

    // First record lands Excellent: silent.
    let o = engine.evaluate(subject, None, &circle_measurement(0.95)).unwrap();
    assert!(o.alert.is_none());

    // Same level again: silent.
    let o = engine.evaluate(subject, None, &circle_measurement(0.92)).unwrap();
    assert!(o.alert.is_none());

    // Drop to Good: one alert.
    let o = engine.evaluate(subject, None, &circle_measurement(0.75)).unwrap();
    assert_eq!(o.alert.as_ref().unwrap().level, ComplianceLevel::Good);

    // Still Good: silent again.
    let o = engine.evaluate(subject, None, &circle_measurement(0.72)).unwrap();
    assert!(o.alert.is_none());

    // Into Critical: alert.
    let o = engine.evaluate(subject, None, &circle_measurement(0.3)).unwrap();
    assert_eq!(o.alert.as_ref().unwrap().level, ComplianceLevel::Critical);

    // Critical again: alerts every time, never deduplicated.
    let o = engine.evaluate(subject, None, &circle_measurement(0.2)).unwrap();
    assert_eq!(o.alert.as_ref().unwrap().level, ComplianceLevel::Critical);
}

#[test]
fn test_trend_reports_improving() {
    let engine = circle_only_engine();
    let subject = "mission-3";
    for confidence in [0.5, 0.6, 0.9] {
        engine.evaluate(subject, None, &circle_measurement(confidence)).unwrap();
    }
    let outcome = engine.evaluate(subject, None, &circle_measurement(0.95)).unwrap();

    // Recent mean 0.925 against prior mean 0.55 with window 2.
    assert_eq!(outcome.trend.direction, TrendDirection::Improving);
    assert_eq!(outcome.trend.window_size, 2);
    assert!((outcome.trend.magnitude - 0.375).abs() < 1e-9);
}

#[test]
fn test_renormalize_policy_keeps_evaluation_alive() {
    let engine = ComplianceEngine::with_defaults();
    let mut measurements = ideal_measurements();
    // Break the golden ratio measurement.
    measurements[3] = PatternMeasurement::GoldenRatio {
        major: 1.618,
        minor: 0.0,
    };

    let outcome = engine.evaluate("mission-4", None, &measurements).unwrap();

    // The other four patterns are ideal; renormalized weights keep 1.0.
    assert!((outcome.score.overall - 1.0).abs() < 1e-9);
    assert_eq!(outcome.score.breakdown.len(), 5);

    let marker = outcome
        .score
        .result_for(GeometricPattern::GoldenRatio)
        .unwrap();
    assert_eq!(marker.confidence, 0.0);
    assert!(marker.detail.contains("validation failed"));
    assert!(outcome
        .score
        .weights_used
        .get(GeometricPattern::GoldenRatio)
        .is_none());
}

#[test]
fn test_require_complete_policy_fails_without_recording() {
    let config = AarConfig::from_toml(
        r#"
[evaluation]
on_invalid_measurement = "require_complete"
"#,
    )
    .unwrap();
    let engine = ComplianceEngine::from_config(&config).unwrap();

    let mut measurements = ideal_measurements();
    measurements[0] = PatternMeasurement::Circle {
        closure_error: f64::NAN,
        radius: 10.0,
    };

    let err = engine.evaluate("mission-5", None, &measurements).unwrap_err();
    assert!(matches!(
        err,
        EvaluationError::InvalidMeasurement {
            pattern: GeometricPattern::Circle,
            ..
        }
    ));
    // A failed evaluation never appends to history.
    assert_eq!(engine.trends().history_len("mission-5"), 0);
}

#[test]
fn test_missing_weighted_pattern_fails_without_recording() {
    let engine = ComplianceEngine::with_defaults();
    let mut measurements = ideal_measurements();
    measurements.remove(4); // no fractal measurement

    let err = engine.evaluate("mission-6", None, &measurements).unwrap_err();
    assert!(matches!(
        err,
        EvaluationError::Scoring(ScoringError::IncompletePatternSet {
            pattern: GeometricPattern::Fractal,
        })
    ));
    assert_eq!(engine.trends().history_len("mission-6"), 0);
}

#[test]
fn test_duplicate_measurement_rejected() {
    let engine = ComplianceEngine::with_defaults();
    let mut measurements = ideal_measurements();
    measurements.push(PatternMeasurement::Circle {
        closure_error: 0.5,
        radius: 1.0,
    });

    let err = engine.evaluate("mission-7", None, &measurements).unwrap_err();
    assert!(matches!(
        err,
        EvaluationError::DuplicateMeasurement {
            pattern: GeometricPattern::Circle,
        }
    ));
}

#[test]
fn test_context_override_changes_weights_used() {
    let config = AarConfig::from_toml(
        r#"
[weights.overrides.structural]
circle = 0.1
triangle = 0.5
spiral = 0.1
golden_ratio = 0.2
fractal = 0.1
"#,
    )
    .unwrap();
    let engine = ComplianceEngine::from_config(&config).unwrap();

    let with_context = engine
        .evaluate("mission-8", Some("structural"), &ideal_measurements())
        .unwrap();
    assert_eq!(
        with_context
            .score
            .weights_used
            .get(GeometricPattern::Triangle),
        Some(0.5)
    );

    let without = engine
        .evaluate("mission-8", Some("unknown-category"), &ideal_measurements())
        .unwrap();
    assert_eq!(
        without.score.weights_used.get(GeometricPattern::Triangle),
        Some(0.2)
    );
}

#[test]
fn test_hydrated_history_drives_alerting() {
    struct SeededSource;
    impl HistorySource for SeededSource {
        fn load_history(&self, subject_id: &str) -> Vec<ComplianceRecord> {
            vec![ComplianceRecord {
                subject_id: subject_id.to_string(),
                score: 0.95,
                level: ComplianceLevel::Excellent,
                timestamp: 1_700_000_000,
            }]
        }
    }

    let engine = circle_only_engine();
    engine.hydrate_from(&SeededSource, &["mission-9"]);
    assert_eq!(engine.trends().history_len("mission-9"), 1);

    // Excellent → Good counts as a crossing thanks to the hydrated record.
    let outcome = engine
        .evaluate("mission-9", None, &circle_measurement(0.75))
        .unwrap();
    assert_eq!(outcome.alert.as_ref().unwrap().level, ComplianceLevel::Good);
}

#[test]
fn test_events_reach_registered_handlers() {
    struct Counting {
        evaluations: AtomicUsize,
        alerts: AtomicUsize,
    }
    impl AarEventHandler for Counting {
        fn on_evaluation_completed(&self, _event: &EvaluationCompletedEvent) {
            self.evaluations.fetch_add(1, Ordering::Relaxed);
        }
        fn on_alert_raised(&self, _event: &AlertRaisedEvent) {
            self.alerts.fetch_add(1, Ordering::Relaxed);
        }
    }

    let mut engine = circle_only_engine();
    let handler = Arc::new(Counting {
        evaluations: AtomicUsize::new(0),
        alerts: AtomicUsize::new(0),
    });
    engine.register_handler(handler.clone());

    engine.evaluate("mission-10", None, &circle_measurement(0.95)).unwrap();
    engine.evaluate("mission-10", None, &circle_measurement(0.2)).unwrap();

    assert_eq!(handler.evaluations.load(Ordering::Relaxed), 2);
    assert_eq!(handler.alerts.load(Ordering::Relaxed), 1);
}

#[test]
fn test_subjects_evaluate_concurrently() {
    let engine = Arc::new(ComplianceEngine::with_defaults());
    let mut handles = Vec::new();
    for i in 0..8 {
        let engine = Arc::clone(&engine);
        handles.push(std::thread::spawn(move || {
            let subject = format!("mission-c{i}");
            for _ in 0..10 {
                engine.evaluate(&subject, None, &ideal_measurements()).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    for i in 0..8 {
        assert_eq!(engine.trends().history_len(&format!("mission-c{i}")), 10);
    }
}

#[test]
fn test_engine_reports_healthy() {
    let engine = ComplianceEngine::with_defaults();
    assert!(engine.is_healthy());
}

#[test]
fn test_outcome_serializes_for_report_generator() {
    let engine = ComplianceEngine::with_defaults();
    let outcome = engine
        .evaluate("mission-11", None, &ideal_measurements())
        .unwrap();

    let json = serde_json::to_string(&outcome).unwrap();
    assert!(json.contains("\"report_id\""));
    assert!(json.contains("\"excellent\""));

    let back: aar_engine::EvaluationOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back.level, outcome.level);
    assert_eq!(back.record.subject_id, "mission-11");
}
