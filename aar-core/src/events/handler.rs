//! Event handler trait with no-op defaults.

use super::types::{
    AlertRaisedEvent, EvaluationCompletedEvent, LevelChangedEvent, RecordAppendedEvent,
};

/// Receiver of engine events. All methods default to no-ops so handlers
/// implement only what they care about: a metrics client might take only
/// `on_evaluation_completed`, an alerting client only `on_alert_raised`,
/// a persistence layer only `on_record_appended`.
pub trait AarEventHandler: Send + Sync {
    fn on_evaluation_completed(&self, event: &EvaluationCompletedEvent) {
        let _ = event;
    }

    fn on_level_changed(&self, event: &LevelChangedEvent) {
        let _ = event;
    }

    fn on_alert_raised(&self, event: &AlertRaisedEvent) {
        let _ = event;
    }

    fn on_record_appended(&self, event: &RecordAppendedEvent) {
        let _ = event;
    }
}
