use serde::{Deserialize, Serialize};

use crate::core::{linspace, SamplingError, SamplingResult};

/// Marker positions and the amplitudes picked at them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    pub markers_x: Vec<f64>,
    pub markers_y: Vec<f64>,
}

impl SampleSet {
    /// No markers drawn; downstream stages must not run
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.markers_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers_x.is_empty()
    }

    /// Distance between consecutive markers, `None` with fewer than two
    pub fn spacing(&self) -> Option<f64> {
        match self.markers_x.as_slice() {
            [first, .., last] => Some((last - first) / (self.len() - 1) as f64),
            _ => None,
        }
    }
}

/// Index of the grid point closest to `t`; ties resolve to the lower index
fn nearest_index(time_grid: &[f64], t: f64) -> Option<usize> {
    time_grid
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - t).abs().total_cmp(&(*b - t).abs()))
        .map(|(i, _)| i)
}

/// Draw `sample_count` markers evenly spaced over `[0, grid_span]`, each
/// taking the amplitude of the nearest original time point.
pub fn sample(
    time_grid: &[f64],
    amplitudes: &[f64],
    sample_count: usize,
    grid_span: f64,
) -> SamplingResult<SampleSet> {
    if time_grid.len() != amplitudes.len() {
        return Err(SamplingError::LengthMismatch {
            left: time_grid.len(),
            right: amplitudes.len(),
        });
    }
    if sample_count == 0 {
        return Ok(SampleSet::empty());
    }
    if time_grid.is_empty() {
        return Err(SamplingError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let markers_x = linspace(0.0, grid_span, sample_count);
    let markers_y = markers_x
        .iter()
        .filter_map(|&t| nearest_index(time_grid, t))
        .map(|i| amplitudes[i])
        .collect();

    Ok(SampleSet {
        markers_x,
        markers_y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_index_prefers_first_on_tie() {
        let grid = [0.0, 1.0, 2.0];
        assert_eq!(nearest_index(&grid, 0.5), Some(0));
        assert_eq!(nearest_index(&grid, 1.6), Some(2));
    }

    #[test]
    fn test_spacing() {
        let set = SampleSet {
            markers_x: vec![0.0, 0.5, 1.0],
            markers_y: vec![0.0; 3],
        };
        assert_eq!(set.spacing(), Some(0.5));
        assert_eq!(SampleSet::empty().spacing(), None);
    }
}
