//! ComplianceEngine — orchestrates one full evaluation.
//!
//! validate (parallel fan-out) → resolve weights → score → classify →
//! alert decision → record + trend. The combined outcome goes back to the
//! report generator; events carry it to monitoring and persistence.

pub mod report_id;

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use aar_core::config::{AarConfig, MeasurementPolicy};
use aar_core::errors::{ConfigError, EvaluationError, MeasurementError};
use aar_core::events::{
    AarEventHandler, AlertRaisedEvent, EvaluationCompletedEvent, EventDispatcher,
    LevelChangedEvent, RecordAppendedEvent,
};
use aar_core::time::unix_timestamp;
use aar_core::traits::HistorySource;
use aar_core::types::collections::FxHashSet;
use aar_core::types::{
    Alert, ComplianceLevel, ComplianceRecord, ComplianceScore, GeometricPattern,
    PatternMeasurement, PatternResult, TrendSummary, PHI,
};

use crate::scoring::{self, WeightResolver};
use crate::thresholds::ThresholdManager;
use crate::trend::TrendTracker;
use crate::validators;

/// Everything one evaluation produces, handed to the report generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub report_id: String,
    pub score: ComplianceScore,
    pub level: ComplianceLevel,
    pub alert: Option<Alert>,
    pub trend: TrendSummary,
    pub record: ComplianceRecord,
}

/// The Sacred Geometry compliance engine.
///
/// Constructed once from validated configuration; `evaluate` is then safe
/// to call from many threads. A failed evaluation returns an error without
/// touching history — no partial result is ever published.
pub struct ComplianceEngine {
    weights: WeightResolver,
    thresholds: ThresholdManager,
    trends: TrendTracker,
    dispatcher: EventDispatcher,
    policy: MeasurementPolicy,
}

impl ComplianceEngine {
    /// Build an engine from configuration. Every table and band set is
    /// validated here; construction fails rather than deferring errors to
    /// evaluation time.
    pub fn from_config(config: &AarConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            weights: WeightResolver::from_config(&config.weights)?,
            thresholds: ThresholdManager::from_config(&config.thresholds)?,
            trends: TrendTracker::from_config(&config.trend),
            dispatcher: EventDispatcher::new(),
            policy: config.evaluation.effective_policy()?,
        })
    }

    /// Engine with compiled defaults: equal weights, default bands,
    /// renormalize policy.
    pub fn with_defaults() -> Self {
        Self {
            weights: WeightResolver::with_defaults(),
            thresholds: ThresholdManager::with_defaults(),
            trends: TrendTracker::with_defaults(),
            dispatcher: EventDispatcher::new(),
            policy: MeasurementPolicy::Renormalize,
        }
    }

    /// Register an event handler. Handlers must be registered before the
    /// engine is shared across threads.
    pub fn register_handler(&mut self, handler: Arc<dyn AarEventHandler>) {
        self.dispatcher.register(handler);
    }

    /// Pre-load subject histories from the persistence boundary on cold
    /// start.
    pub fn hydrate_from(&self, source: &dyn HistorySource, subject_ids: &[&str]) {
        for subject_id in subject_ids {
            let records = source.load_history(subject_id);
            if !records.is_empty() {
                self.trends.hydrate(subject_id, records);
            }
        }
    }

    /// Cheap self-check for external health-check wiring.
    pub fn is_healthy(&self) -> bool {
        (PHI - 1.618033988749895).abs() < 1e-10
    }

    /// Run one full evaluation for a subject.
    ///
    /// Validators fan out in parallel and fan in before scoring. Behavior on
    /// an invalid measurement follows the configured policy: renormalize
    /// around it, or fail the evaluation. History is only touched after
    /// scoring succeeds.
    pub fn evaluate(
        &self,
        subject_id: &str,
        context: Option<&str>,
        measurements: &[PatternMeasurement],
    ) -> Result<EvaluationOutcome, EvaluationError> {
        let started = Instant::now();
        let weights = self.weights.resolve(context);

        let mut seen = FxHashSet::default();
        for measurement in measurements {
            if !seen.insert(measurement.pattern()) {
                return Err(EvaluationError::DuplicateMeasurement {
                    pattern: measurement.pattern(),
                });
            }
        }

        // Independent pure computations: fan out, fan in before scoring.
        let validated: Vec<(GeometricPattern, Result<PatternResult, MeasurementError>)> =
            measurements
                .par_iter()
                .map(|m| (m.pattern(), validators::validate(m)))
                .collect();

        let mut results: SmallVec<[PatternResult; 5]> = SmallVec::new();
        let mut failed: SmallVec<[(GeometricPattern, MeasurementError); 5]> = SmallVec::new();
        for (pattern, outcome) in validated {
            match outcome {
                Ok(result) => results.push(result),
                Err(error) => failed.push((pattern, error)),
            }
        }

        let score = if failed.is_empty() {
            scoring::score(&results, weights)?
        } else {
            match self.policy {
                MeasurementPolicy::RequireComplete => {
                    let (pattern, source) = failed.swap_remove(0);
                    return Err(EvaluationError::InvalidMeasurement { pattern, source });
                }
                MeasurementPolicy::Renormalize => {
                    let excluded: FxHashSet<GeometricPattern> =
                        failed.iter().map(|(p, _)| *p).collect();
                    for (pattern, error) in &failed {
                        tracing::warn!(
                            subject = %subject_id,
                            pattern = %pattern,
                            error = %error,
                            "measurement failed validation; renormalizing remaining weights"
                        );
                        results.push(PatternResult::failed(*pattern, error));
                    }
                    let effective = weights
                        .renormalized_excluding(&excluded)
                        .ok_or(EvaluationError::NoUsableMeasurements)?;
                    scoring::score(&results, &effective)?
                }
            }
        };

        let level = self.thresholds.classify(score.overall);
        let timestamp = unix_timestamp();
        let (previous, record, trend) =
            self.trends
                .append_and_summarize(subject_id, score.overall, level, timestamp);
        let alert = self
            .thresholds
            .evaluate(subject_id, score.overall, previous, timestamp);
        let report_id = report_id::generate(subject_id, timestamp);
        let duration_ms = started.elapsed().as_millis() as u64;

        self.dispatcher
            .emit_evaluation_completed(&EvaluationCompletedEvent {
                subject_id: subject_id.to_string(),
                report_id: report_id.clone(),
                overall: score.overall,
                level,
                duration_ms,
            });
        if let Some(previous) = previous {
            if previous != level {
                self.dispatcher.emit_level_changed(&LevelChangedEvent {
                    subject_id: subject_id.to_string(),
                    previous,
                    current: level,
                    score: score.overall,
                });
            }
        }
        if let Some(alert) = &alert {
            tracing::warn!(
                subject = %subject_id,
                level = %alert.level,
                score = alert.score,
                "compliance alert"
            );
            self.dispatcher.emit_alert_raised(&AlertRaisedEvent {
                alert: alert.clone(),
            });
        }
        self.dispatcher.emit_record_appended(&RecordAppendedEvent {
            record: record.clone(),
            trend,
        });

        tracing::info!(
            subject = %subject_id,
            report = %report_id,
            overall = score.overall,
            level = %level,
            trend = %trend.direction,
            duration_ms,
            "evaluation completed"
        );

        Ok(EvaluationOutcome {
            report_id,
            score,
            level,
            alert,
            trend,
            record,
        })
    }

    /// The trend tracker (history queries, staleness checks).
    pub fn trends(&self) -> &TrendTracker {
        &self.trends
    }

    /// The threshold manager (classification, advisory data).
    pub fn thresholds(&self) -> &ThresholdManager {
        &self.thresholds
    }
}
