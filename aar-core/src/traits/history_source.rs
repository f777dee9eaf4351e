//! HistorySource trait — cold-start hydration boundary.
//!
//! In standalone mode, subjects start with empty histories. A persistence
//! layer implements the trait to supply previously stored records when a
//! subject is first seen after a restart. The engine never reads storage
//! directly.

use crate::types::record::ComplianceRecord;

/// Provider of historical compliance records for a subject.
///
/// The default implementation returns no history, which is correct for
/// standalone and test use.
pub trait HistorySource: Send + Sync {
    /// Load the stored history for a subject, oldest first.
    fn load_history(&self, subject_id: &str) -> Vec<ComplianceRecord> {
        let _ = subject_id;
        Vec::new()
    }
}

/// No-op implementation for standalone mode — every subject starts cold.
pub struct NullHistorySource;

impl HistorySource for NullHistorySource {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_source_returns_empty() {
        let source = NullHistorySource;
        assert!(source.load_history("mission-1").is_empty());
    }
}
