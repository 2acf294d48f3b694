//! Whittaker–Shannon reconstruction and cubic resampling

use std::f64::consts::PI;

use super::sampler::SampleSet;
use super::spline::CubicSpline;
use crate::core::{SamplingError, SamplingResult};

/// Normalized sinc, `sin(pi x) / (pi x)` with `sinc(0) = 1`
pub fn sinc(x: f64) -> f64 {
    if x.abs() < 1e-15 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

/// Evaluate `sum_n y[n] * sinc((t - n*T) / T)` at every `t` of `target_grid`
pub fn reconstruct(
    markers: &SampleSet,
    sampling_period: f64,
    target_grid: &[f64],
) -> SamplingResult<Vec<f64>> {
    if sampling_period == 0.0 || !sampling_period.is_finite() {
        return Err(SamplingError::DivisionByZero("sampling period is zero"));
    }

    Ok(target_grid
        .iter()
        .map(|&t| {
            markers
                .markers_y
                .iter()
                .enumerate()
                .map(|(n, y)| y * sinc((t - n as f64 * sampling_period) / sampling_period))
                .sum::<f64>()
        })
        .collect())
}

/// Cubic interpolation of `(source_x, source_y)` evaluated at `target_x`
pub fn resample(source_x: &[f64], source_y: &[f64], target_x: &[f64]) -> SamplingResult<Vec<f64>> {
    let spline = CubicSpline::new(source_x, source_y)?;
    target_x.iter().map(|&t| spline.evaluate(t)).collect()
}
