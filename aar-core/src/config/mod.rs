//! Engine configuration with layered resolution and fail-fast validation.

pub mod aar_config;
pub mod evaluation_config;
pub mod threshold_config;
pub mod trend_config;
pub mod weight_config;

pub use aar_config::{AarConfig, CliOverrides};
pub use evaluation_config::{EvaluationConfig, MeasurementPolicy};
pub use threshold_config::{BandConfig, ThresholdConfig};
pub use trend_config::TrendConfig;
pub use weight_config::WeightConfig;
