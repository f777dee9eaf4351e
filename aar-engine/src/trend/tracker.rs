//! TrendTracker — arena of independently-locked per-subject histories.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use aar_core::config::TrendConfig;
use aar_core::types::collections::FxHashMap;
use aar_core::types::{ComplianceLevel, ComplianceRecord, TrendSummary};

use super::compute_trend;

/// One subject's append-only history. Never rewritten, only appended —
/// except by `hydrate`, which replaces the whole cell before first use.
#[derive(Debug, Default)]
struct SubjectHistory {
    records: Vec<ComplianceRecord>,
}

/// Maintains per-subject compliance histories and computes trend summaries.
///
/// Each subject gets its own lock, so evaluations for different subjects
/// proceed fully in parallel; only concurrent evaluations of the *same*
/// subject serialize. The outer map lock is held just long enough to fetch
/// or insert a cell, never across an append.
pub struct TrendTracker {
    subjects: RwLock<FxHashMap<String, Arc<Mutex<SubjectHistory>>>>,
    window: usize,
    epsilon: f64,
    stale_after_secs: u64,
}

impl TrendTracker {
    /// Build a tracker from validated trend configuration.
    pub fn from_config(config: &TrendConfig) -> Self {
        Self {
            subjects: RwLock::new(FxHashMap::default()),
            window: config.effective_window(),
            epsilon: config.effective_epsilon(),
            stale_after_secs: config.effective_stale_after_secs(),
        }
    }

    /// Tracker with compiled defaults (window 5, epsilon 0.05, 1h staleness).
    pub fn with_defaults() -> Self {
        Self::from_config(&TrendConfig::default())
    }

    /// Append a record to the subject's history (created on first use).
    ///
    /// Appends keep the history strictly time-ordered: a timestamp earlier
    /// than the last record's is clamped to it rather than rewriting order.
    pub fn record(
        &self,
        subject_id: &str,
        score: f64,
        level: ComplianceLevel,
        timestamp: i64,
    ) -> ComplianceRecord {
        let cell = self.cell(subject_id);
        let mut history = lock_cell(&cell);
        Self::append(&mut history, subject_id, score, level, timestamp)
    }

    /// Trend summary over the subject's current history with an explicit
    /// window. Unknown subjects report an empty-history Stable summary.
    pub fn trend(&self, subject_id: &str, window: usize) -> TrendSummary {
        match self.existing_cell(subject_id) {
            Some(cell) => {
                let history = lock_cell(&cell);
                compute_trend(&history.records, window, self.epsilon)
            }
            None => TrendSummary::stable(0),
        }
    }

    /// Append a record and summarize the trend it produced, atomically with
    /// respect to other evaluations of the same subject.
    ///
    /// Returns the level of the previous record (None for a first-ever
    /// record), the appended record, and the fresh trend summary. Holding
    /// the cell lock across all three is what makes an evaluation's
    /// `record` + `trend` observe a consistent, monotonically growing
    /// history.
    pub fn append_and_summarize(
        &self,
        subject_id: &str,
        score: f64,
        level: ComplianceLevel,
        timestamp: i64,
    ) -> (Option<ComplianceLevel>, ComplianceRecord, TrendSummary) {
        let cell = self.cell(subject_id);
        let mut history = lock_cell(&cell);

        let previous = history.records.last().map(|r| r.level);
        let record = Self::append(&mut history, subject_id, score, level, timestamp);
        let trend = compute_trend(&history.records, self.window, self.epsilon);

        (previous, record, trend)
    }

    /// Replace a subject's history with records supplied by the persistence
    /// layer on cold start. Records are sorted by timestamp so a source that
    /// returns them unordered still yields a valid history.
    pub fn hydrate(&self, subject_id: &str, mut records: Vec<ComplianceRecord>) {
        records.sort_by_key(|r| r.timestamp);
        let cell = self.cell(subject_id);
        let mut history = lock_cell(&cell);
        history.records = records;
        tracing::debug!(
            subject = %subject_id,
            records = history.records.len(),
            "history hydrated"
        );
    }

    /// Level of the subject's most recent record.
    pub fn last_level(&self, subject_id: &str) -> Option<ComplianceLevel> {
        let cell = self.existing_cell(subject_id)?;
        let history = lock_cell(&cell);
        history.records.last().map(|r| r.level)
    }

    /// Number of records held for a subject.
    pub fn history_len(&self, subject_id: &str) -> usize {
        match self.existing_cell(subject_id) {
            Some(cell) => lock_cell(&cell).records.len(),
            None => 0,
        }
    }

    /// Copy of a subject's history, oldest first.
    pub fn snapshot(&self, subject_id: &str) -> Vec<ComplianceRecord> {
        match self.existing_cell(subject_id) {
            Some(cell) => lock_cell(&cell).records.clone(),
            None => Vec::new(),
        }
    }

    /// Whether the subject's data is stale: its latest record is older than
    /// the configured horizon. A subject with no records counts as stale.
    pub fn is_stale(&self, subject_id: &str, now: i64) -> bool {
        match self.existing_cell(subject_id) {
            Some(cell) => {
                let history = lock_cell(&cell);
                match history.records.last() {
                    Some(last) => now - last.timestamp > self.stale_after_secs as i64,
                    None => true,
                }
            }
            None => true,
        }
    }

    /// The configured comparison window.
    pub fn window(&self) -> usize {
        self.window
    }

    fn append(
        history: &mut SubjectHistory,
        subject_id: &str,
        score: f64,
        level: ComplianceLevel,
        timestamp: i64,
    ) -> ComplianceRecord {
        let timestamp = match history.records.last() {
            Some(last) => timestamp.max(last.timestamp),
            None => timestamp,
        };
        let record = ComplianceRecord {
            subject_id: subject_id.to_string(),
            score,
            level,
            timestamp,
        };
        history.records.push(record.clone());
        record
    }

    /// Fetch or create the subject's cell. The write lock is taken only on
    /// first sight of a subject.
    fn cell(&self, subject_id: &str) -> Arc<Mutex<SubjectHistory>> {
        if let Some(cell) = self.existing_cell(subject_id) {
            return cell;
        }
        let mut map = self
            .subjects
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        map.entry(subject_id.to_string())
            .or_default()
            .clone()
    }

    fn existing_cell(&self, subject_id: &str) -> Option<Arc<Mutex<SubjectHistory>>> {
        let map = self
            .subjects
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        map.get(subject_id).cloned()
    }
}

/// A cell append is a single push and never leaves a half-written history,
/// so a cell poisoned by a panicking thread still holds consistent data —
/// recover the guard rather than propagate.
fn lock_cell(cell: &Mutex<SubjectHistory>) -> MutexGuard<'_, SubjectHistory> {
    cell.lock().unwrap_or_else(PoisonError::into_inner)
}
