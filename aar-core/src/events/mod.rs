//! Event system carrying evaluation results and alerts to external
//! collaborators. The engine never performs delivery itself.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::AarEventHandler;
pub use types::{
    AlertRaisedEvent, EvaluationCompletedEvent, LevelChangedEvent, RecordAppendedEvent,
};
