use serde::{Deserialize, Serialize};

use super::error::{SamplingError, SamplingResult};

/// Time/amplitude pairs on a (nominally uniform) increasing time grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    time: Vec<f64>,
    amplitude: Vec<f64>,
}

impl TimeSeries {
    pub fn new(time: Vec<f64>, amplitude: Vec<f64>) -> SamplingResult<Self> {
        if time.len() != amplitude.len() {
            return Err(SamplingError::LengthMismatch {
                left: time.len(),
                right: amplitude.len(),
            });
        }
        Ok(Self { time, amplitude })
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn amplitude(&self) -> &[f64] {
        &self.amplitude
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Same time base, new amplitudes (e.g. after noise injection)
    pub fn with_amplitude(&self, amplitude: Vec<f64>) -> SamplingResult<Self> {
        Self::new(self.time.clone(), amplitude)
    }

    pub fn max_time(&self) -> Option<f64> {
        self.time.iter().copied().reduce(f64::max)
    }

    pub fn min_time(&self) -> Option<f64> {
        self.time.iter().copied().reduce(f64::min)
    }
}

/// `n` evenly spaced points over `[start, stop]`, both ends included
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut grid: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            grid[n - 1] = stop;
            grid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace(0.0, 1.0, 5);
        assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }

    #[test]
    fn test_series_rejects_ragged_input() {
        let err = TimeSeries::new(vec![0.0, 1.0], vec![1.0]).unwrap_err();
        assert_eq!(err, SamplingError::LengthMismatch { left: 2, right: 1 });
    }
}
