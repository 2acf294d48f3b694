use serde::{Deserialize, Serialize};

use crate::core::{SamplingError, SamplingResult};

/// Pointwise `original - reconstructed` on a shared grid
pub fn compute_error(original: &[f64], reconstructed: &[f64]) -> SamplingResult<Vec<f64>> {
    if original.len() != reconstructed.len() {
        return Err(SamplingError::LengthMismatch {
            left: original.len(),
            right: reconstructed.len(),
        });
    }
    Ok(original
        .iter()
        .zip(reconstructed)
        .map(|(o, r)| o - r)
        .collect())
}

/// Aggregate view of a residual
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorSummary {
    pub rms: f64,
    pub peak: f64,
    pub mean: f64,
}

impl ErrorSummary {
    pub fn from_residual(residual: &[f64]) -> Self {
        if residual.is_empty() {
            return Self::default();
        }
        let n = residual.len() as f64;
        Self {
            rms: (residual.iter().map(|e| e * e).sum::<f64>() / n).sqrt(),
            peak: residual.iter().fold(0.0, |acc: f64, e| acc.max(e.abs())),
            mean: residual.iter().sum::<f64>() / n,
        }
    }
}
