//! Per-subject score history and trend summaries.

pub mod tracker;

pub use tracker::TrendTracker;

use aar_core::types::{ComplianceRecord, TrendDirection, TrendSummary};

/// Compute a trend summary over a time-ordered record slice.
///
/// Compares the mean of the most recent `window` scores against the mean of
/// the up-to-`window` scores preceding them. Short histories degrade
/// gracefully: the window shrinks to what the history can support and
/// `window_size` reports the size actually used; fewer than 2 records means
/// there is nothing to compare, so the trend is Stable.
pub fn compute_trend(records: &[ComplianceRecord], window: usize, epsilon: f64) -> TrendSummary {
    let n = records.len();
    if n < 2 {
        return TrendSummary::stable(n);
    }

    let w = window.clamp(1, n - 1);
    let recent = &records[n - w..];
    let prior_start = (n - w).saturating_sub(w);
    let prior = &records[prior_start..n - w];

    let recent_mean = mean_score(recent);
    let prior_mean = mean_score(prior);
    let delta = recent_mean - prior_mean;

    let direction = if delta > epsilon {
        TrendDirection::Improving
    } else if delta < -epsilon {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    TrendSummary {
        direction,
        magnitude: delta.abs(),
        window_size: w,
    }
}

fn mean_score(records: &[ComplianceRecord]) -> f64 {
    records.iter().map(|r| r.score).sum::<f64>() / records.len() as f64
}
