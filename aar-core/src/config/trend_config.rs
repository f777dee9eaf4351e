//! Trend tracking configuration.

use serde::{Deserialize, Serialize};

/// Trend window, direction epsilon, and staleness horizon.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrendConfig {
    /// Comparison window in records. Default 5.
    pub window: Option<usize>,
    /// Minimum mean delta to leave Stable. Default 0.05.
    pub epsilon: Option<f64>,
    /// Age in seconds after which a subject's data counts as stale.
    /// Default 3600 (one hour).
    pub stale_after_secs: Option<u64>,
}

impl TrendConfig {
    pub fn effective_window(&self) -> usize {
        self.window.unwrap_or(5)
    }

    pub fn effective_epsilon(&self) -> f64 {
        self.epsilon.unwrap_or(0.05)
    }

    pub fn effective_stale_after_secs(&self) -> u64 {
        self.stale_after_secs.unwrap_or(3600)
    }
}
