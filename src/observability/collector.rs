use std::collections::HashMap;
use std::sync::Arc;
use serde::Serialize;
use super::StageMetrics;

/// Pipeline stages that report metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Derive,
    Noise,
    Sample,
    Reconstruct,
    Resample,
    Error,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Derive,
        Stage::Noise,
        Stage::Sample,
        Stage::Reconstruct,
        Stage::Resample,
        Stage::Error,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Derive => "derive",
            Self::Noise => "noise",
            Self::Sample => "sample",
            Self::Reconstruct => "reconstruct",
            Self::Resample => "resample",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub stage: String,
    pub runs: u64,
    pub errors_count: u64,
    pub avg_latency_us: u64,
}

/// One `StageMetrics` per pipeline stage
#[derive(Debug, Clone)]
pub struct PipelineMetrics {
    metrics: HashMap<Stage, Arc<StageMetrics>>,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self {
            metrics: Stage::ALL
                .iter()
                .map(|stage| (*stage, Arc::new(StageMetrics::new(stage.name()))))
                .collect(),
        }
    }

    pub fn stage(&self, stage: Stage) -> Arc<StageMetrics> {
        self.metrics
            .get(&stage)
            .cloned()
            .unwrap_or_else(|| Arc::new(StageMetrics::new(stage.name())))
    }

    pub fn track<T, E>(&self, stage: Stage, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        match self.metrics.get(&stage) {
            Some(metrics) => metrics.track(f),
            None => f(),
        }
    }

    pub fn snapshot(&self) -> HashMap<String, MetricsSnapshot> {
        self.metrics
            .values()
            .map(|metrics| {
                (
                    metrics.stage().to_string(),
                    MetricsSnapshot {
                        stage: metrics.stage().to_string(),
                        runs: metrics.runs(),
                        errors_count: metrics.errors_count(),
                        avg_latency_us: metrics.avg_latency_us(),
                    },
                )
            })
            .collect()
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}
