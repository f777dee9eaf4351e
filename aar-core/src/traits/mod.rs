//! Boundary traits implemented by external collaborators.

pub mod history_source;

pub use history_source::{HistorySource, NullHistorySource};
