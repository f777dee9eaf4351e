//! Alerts, persisted compliance records, and trend summaries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::level::ComplianceLevel;

/// Raised when an evaluation crosses a threshold boundary, and on every
/// Critical evaluation. Handed to the external alerting client; the engine
/// itself never delivers anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub level: ComplianceLevel,
    pub score: f64,
    pub subject_id: String,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    pub message: String,
}

/// One timestamped entry in a subject's append-only compliance history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRecord {
    pub subject_id: String,
    pub score: f64,
    pub level: ComplianceLevel,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
}

/// Direction of a score trend over recent history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Stable,
    Declining,
}

impl TrendDirection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Declining => "declining",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Derived trend over a subject's recent records. Recomputed on each new
/// record, never stored independently of the record that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub direction: TrendDirection,
    /// Absolute difference between the recent-window and prior-window means.
    pub magnitude: f64,
    /// The window size actually used (shrinks for short histories).
    pub window_size: usize,
}

impl TrendSummary {
    /// Summary for a history too short to compare against anything.
    pub fn stable(window_size: usize) -> Self {
        Self {
            direction: TrendDirection::Stable,
            magnitude: 0.0,
            window_size,
        }
    }
}
