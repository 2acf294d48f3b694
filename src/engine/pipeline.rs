use log::{debug, warn};

use crate::core::{linspace, SamplingError, SamplingResult, TimeSeries};
use crate::dsp::{compute_error, reconstruct, resample, sample, DerivedParameters, SampleSet};
use crate::observability::{PipelineMetrics, Stage};

/// How many markers to draw and where
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingPlan {
    pub sample_count: usize,
    /// Markers cover `[origin, origin + grid_span]`
    pub origin: f64,
    pub grid_span: f64,
    /// Requested sampling frequency in Hz
    pub sampling_frequency: f64,
}

/// Marker count for a real-valued request, bounded by `limit`
fn marker_count(count: f64, limit: usize) -> SamplingResult<usize> {
    if count.is_nan() || count <= 0.0 {
        return Ok(0);
    }
    if !count.is_finite() || count > limit as f64 {
        return Err(SamplingError::TooManySamples {
            requested: count,
            limit,
        });
    }
    Ok(count as usize)
}

impl SamplingPlan {
    /// Nothing to sample; only the raw signal is shown
    pub fn disabled() -> Self {
        Self {
            sample_count: 0,
            origin: 0.0,
            grid_span: 0.0,
            sampling_frequency: 0.0,
        }
    }

    /// Imported signals are sampled at `ratio` times their Nyquist frequency
    /// over their own time range.
    pub fn for_imported(
        params: &DerivedParameters,
        ratio: f64,
        raw: &TimeSeries,
        limit: usize,
    ) -> SamplingResult<Self> {
        let sampling_frequency = ratio * params.max_frequency;
        let origin = raw.min_time().unwrap_or(0.0);
        Ok(Self {
            sample_count: marker_count((sampling_frequency * params.duration).round(), limit)?,
            origin,
            grid_span: raw.max_time().unwrap_or(origin) - origin,
            sampling_frequency,
        })
    }

    /// Composed signals use the sampling frequency derived from the mixture
    /// and truncate the marker count.
    pub fn for_composed(params: &DerivedParameters, limit: usize) -> SamplingResult<Self> {
        Ok(Self {
            sample_count: marker_count(
                (params.sampling_frequency * params.duration).floor(),
                limit,
            )?,
            origin: 0.0,
            grid_span: params.duration,
            sampling_frequency: params.sampling_frequency,
        })
    }
}

/// Result of the sample/reconstruct/error stages
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// Zero markers: sampling, reconstruction and error stages were skipped
    RawOnly,
    Reconstructed {
        samples: SampleSet,
        /// Sinc sum on its own grid
        reconstructed: TimeSeries,
        /// Sinc sum resampled onto the raw grid
        resampled: Vec<f64>,
        error: TimeSeries,
    },
}

impl CycleOutcome {
    pub fn samples(&self) -> Option<&SampleSet> {
        match self {
            Self::RawOnly => None,
            Self::Reconstructed { samples, .. } => Some(samples),
        }
    }

    pub fn error(&self) -> Option<&TimeSeries> {
        match self {
            Self::RawOnly => None,
            Self::Reconstructed { error, .. } => Some(error),
        }
    }
}

/// Shared tail of both signal modes: sample `raw`, rebuild it, measure the
/// residual on the raw grid.
///
/// Stages work on a time axis shifted by `plan.origin` so markers and the
/// sinc grid start at zero; outputs are shifted back.
pub fn run_stages(
    raw: &TimeSeries,
    plan: &SamplingPlan,
    metrics: &PipelineMetrics,
) -> SamplingResult<CycleOutcome> {
    if plan.sample_count < 2 {
        warn!(
            "Sample count resolved to {} at {} Hz; showing raw signal only",
            plan.sample_count, plan.sampling_frequency
        );
        return Ok(CycleOutcome::RawOnly);
    }

    let local_time: Vec<f64> = raw.time().iter().map(|t| t - plan.origin).collect();
    let mut samples = metrics.track(Stage::Sample, || {
        sample(&local_time, raw.amplitude(), plan.sample_count, plan.grid_span)
    })?;

    let period = samples.spacing().ok_or(SamplingError::InsufficientData {
        required: 2,
        actual: samples.len(),
    })?;
    let grid = linspace(0.0, samples.len() as f64 * period, samples.len());
    debug!(
        "Reconstructing {} markers, kernel period {:.6} s, origin {} s",
        samples.len(),
        period,
        plan.origin
    );

    let rebuilt = metrics.track(Stage::Reconstruct, || reconstruct(&samples, period, &grid))?;
    let resampled = metrics.track(Stage::Resample, || resample(&grid, &rebuilt, &local_time))?;
    let residual = metrics.track(Stage::Error, || compute_error(raw.amplitude(), &resampled))?;

    for x in samples.markers_x.iter_mut() {
        *x += plan.origin;
    }
    let grid = grid.into_iter().map(|t| t + plan.origin).collect();

    Ok(CycleOutcome::Reconstructed {
        samples,
        reconstructed: TimeSeries::new(grid, rebuilt)?,
        resampled,
        error: raw.with_amplitude(residual)?,
    })
}
