pub mod control;
pub mod pipeline;
pub mod session;

pub use control::{PipelineParams, SamplingRatio, SignalMode};
pub use pipeline::{run_stages, CycleOutcome, SamplingPlan};
pub use session::{Cycle, Session};
