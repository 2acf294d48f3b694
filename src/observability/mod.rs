pub mod metrics;
pub mod collector;

pub use metrics::StageMetrics;
pub use collector::{MetricsSnapshot, PipelineMetrics, Stage};
