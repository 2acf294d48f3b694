use std::collections::HashMap;
use serde::{Serialize, Deserialize};

pub const RAW_SERIES: &str = "raw/noisy signal";
pub const RECONSTRUCTED_SERIES: &str = "reconstructed signal";
pub const ERROR_SERIES: &str = "error signal";
pub const MARKER_SERIES: &str = "sample markers";

/// Parallel x/y sequences for one plotted curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Output of one recomputation cycle, handed to the plotting layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Sequential cycle number for ordering
    pub sequence_id: u64,

    /// Named curves keyed by series name
    pub series: HashMap<String, PlotSeries>,

    /// Side-channel labels (sampling_frequency_hz, ratio, sample_count)
    pub metadata: HashMap<String, String>,
}

impl RenderFrame {
    pub fn new(sequence_id: u64) -> Self {
        Self {
            sequence_id,
            series: HashMap::new(),
            metadata: HashMap::new(),
        }
    }

    pub fn insert_series(&mut self, name: &str, x: Vec<f64>, y: Vec<f64>) {
        self.series.insert(name.to_string(), PlotSeries { x, y });
    }

    pub fn get(&self, name: &str) -> Option<&PlotSeries> {
        self.series.get(name)
    }

    pub fn has_reconstruction(&self) -> bool {
        self.series.contains_key(RECONSTRUCTED_SERIES)
    }
}
