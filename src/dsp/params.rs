use serde::{Deserialize, Serialize};

use crate::core::{SamplingError, SamplingResult, TimeSeries};

/// Sampling parameters of the active signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedParameters {
    pub sampling_period: f64,
    pub sampling_frequency: f64,
    /// Nyquist frequency for imported signals, mixed frequency for compositions
    pub max_frequency: f64,
    pub duration: f64,
}

/// Derive parameters from the time base of an imported series.
///
/// The period is the mean of consecutive time differences, which tolerates
/// small jitter but assumes a uniform grid.
pub fn derive_from_time_series(series: &TimeSeries) -> SamplingResult<DerivedParameters> {
    let time = series.time();
    if time.len() < 2 {
        return Err(SamplingError::InsufficientData {
            required: 2,
            actual: time.len(),
        });
    }

    let diffs = time.windows(2).map(|w| w[1] - w[0]);
    let sampling_period = diffs.sum::<f64>() / (time.len() - 1) as f64;
    let sampling_frequency = 1.0 / sampling_period;

    let min = time.iter().copied().fold(f64::INFINITY, f64::min);
    let max = time.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(DerivedParameters {
        sampling_period,
        sampling_frequency,
        max_frequency: sampling_frequency / 2.0,
        duration: max - min,
    })
}

/// Mean of the component frequencies, 0 when there are none
pub fn mixed_frequency(frequencies: &[f64]) -> f64 {
    if frequencies.is_empty() {
        return 0.0;
    }
    frequencies.iter().sum::<f64>() / frequencies.len() as f64
}

/// Derive parameters for a composed signal sampled at `ratio` times its
/// mixed frequency over a grid of length `duration`.
pub fn derive_from_composition(
    frequencies: &[f64],
    ratio: f64,
    duration: f64,
) -> SamplingResult<DerivedParameters> {
    let mixed = mixed_frequency(frequencies);
    let sampling_frequency = ratio * mixed;
    if sampling_frequency == 0.0 {
        return Err(SamplingError::DivisionByZero("sampling frequency is zero"));
    }

    Ok(DerivedParameters {
        sampling_period: 1.0 / sampling_frequency,
        sampling_frequency,
        max_frequency: mixed,
        duration,
    })
}
