use serde::{Deserialize, Serialize};

use crate::core::{SamplingError, SamplingResult};

pub const MAX_RATIO: u8 = 8;

/// Default cap on markers per cycle; the sinc sum grows with its square
pub const MAX_SAMPLES: usize = 50_000;

/// Which signal the sampling pipeline operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalMode {
    Imported,
    Composed,
}

/// Multiplier applied to the signal's reference frequency (0 disables sampling)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SamplingRatio(u8);

impl SamplingRatio {
    pub fn new(ratio: u8) -> SamplingResult<Self> {
        Self::bounded(ratio, MAX_RATIO)
    }

    pub fn bounded(ratio: u8, max: u8) -> SamplingResult<Self> {
        if ratio > max {
            return Err(SamplingError::RatioOutOfRange { ratio, max });
        }
        Ok(Self(ratio))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for SamplingRatio {
    fn default() -> Self {
        Self(0)
    }
}

/// Inputs of one recomputation cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineParams {
    pub mode: SignalMode,
    pub ratio: SamplingRatio,
    /// `None` leaves the signal noiseless
    pub snr_db: Option<f64>,
}

impl PipelineParams {
    pub fn new(mode: SignalMode, ratio: SamplingRatio) -> Self {
        Self {
            mode,
            ratio,
            snr_db: None,
        }
    }

    pub fn with_snr(mut self, snr_db: f64) -> Self {
        self.snr_db = Some(snr_db);
        self
    }
}
