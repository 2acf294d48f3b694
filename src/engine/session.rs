use log::{debug, info};

use super::control::{PipelineParams, SamplingRatio, SignalMode};
use super::pipeline::{run_stages, CycleOutcome, SamplingPlan};
use crate::core::frame::{ERROR_SERIES, MARKER_SERIES, RAW_SERIES, RECONSTRUCTED_SERIES};
use crate::core::{RenderFrame, SamplingError, SamplingResult, SignalSource, TimeSeries};
use crate::dsp::{
    derive_from_composition, derive_from_time_series, DerivedParameters, ErrorSummary,
    NoiseInjector,
};
use crate::observability::{PipelineMetrics, Stage};
use crate::sources::{ComposedSignal, ComposedSignalStore, ImportedSignal, SignalComponent};
use crate::storage::SessionConfig;

/// Everything one recomputation produced
#[derive(Debug, Clone)]
pub struct Cycle {
    pub source_name: String,
    /// Signal after optional noise injection
    pub raw: TimeSeries,
    /// `None` when the composition gives no usable sampling frequency
    pub parameters: Option<DerivedParameters>,
    pub plan: SamplingPlan,
    pub ratio: SamplingRatio,
    pub outcome: CycleOutcome,
}

impl Cycle {
    pub fn error_summary(&self) -> Option<ErrorSummary> {
        self.outcome
            .error()
            .map(|error| ErrorSummary::from_residual(error.amplitude()))
    }

    pub fn to_frame(&self, sequence_id: u64) -> RenderFrame {
        let mut frame = RenderFrame::new(sequence_id);
        frame.insert_series(RAW_SERIES, self.raw.time().to_vec(), self.raw.amplitude().to_vec());

        if let CycleOutcome::Reconstructed {
            samples,
            reconstructed,
            error,
            ..
        } = &self.outcome
        {
            frame.insert_series(
                MARKER_SERIES,
                samples.markers_x.clone(),
                samples.markers_y.clone(),
            );
            frame.insert_series(
                RECONSTRUCTED_SERIES,
                reconstructed.time().to_vec(),
                reconstructed.amplitude().to_vec(),
            );
            frame.insert_series(ERROR_SERIES, error.time().to_vec(), error.amplitude().to_vec());
        }

        frame.metadata.insert("source".to_string(), self.source_name.clone());
        frame.metadata.insert(
            "sampling_frequency_hz".to_string(),
            format!("{}Hz", self.plan.sampling_frequency),
        );
        frame
            .metadata
            .insert("ratio".to_string(), format!("{}x", self.ratio.value()));
        frame.metadata.insert(
            "sample_count".to_string(),
            self.plan.sample_count.to_string(),
        );
        frame
    }
}

/// Mutable state behind the sampling sandbox: the imported signal, the
/// composition, and the noise source.
pub struct Session {
    config: SessionConfig,
    imported: Option<ImportedSignal>,
    store: ComposedSignalStore,
    noise: NoiseInjector,
    metrics: PipelineMetrics,
    sequence_id: u64,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let noise = NoiseInjector::new(config.noise_seed);
        Self {
            config,
            imported: None,
            store: ComposedSignalStore::new(),
            noise,
            metrics: PipelineMetrics::new(),
            sequence_id: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn metrics(&self) -> &PipelineMetrics {
        &self.metrics
    }

    /// Number of completed recomputations
    pub fn sequence_id(&self) -> u64 {
        self.sequence_id
    }

    pub fn store(&self) -> &ComposedSignalStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ComposedSignalStore {
        &mut self.store
    }

    pub fn imported(&self) -> Option<&ImportedSignal> {
        self.imported.as_ref()
    }

    pub fn load_signal(&mut self, signal: ImportedSignal) {
        info!("Imported signal '{}'", signal.name());
        self.imported = Some(signal);
    }

    pub fn add_component(&mut self, component: SignalComponent) -> SamplingResult<u32> {
        let key = self.store.add(component)?;
        info!(
            "Added component {}: amplitude {}, frequency {} Hz, phase {} rad",
            key, component.amplitude, component.frequency, component.phase
        );
        Ok(key)
    }

    pub fn remove_component(&mut self, key: u32) -> Option<SignalComponent> {
        let removed = self.store.remove(key);
        if removed.is_some() {
            info!("Removed component {}", key);
        }
        removed
    }

    /// Merge a serialized composition into the current one
    pub fn merge_composition(&mut self, json: &str) -> SamplingResult<()> {
        self.store.deserialize(json)?;
        info!("Merged composition; {} components", self.store.len());
        Ok(())
    }

    pub fn composition_json(&self) -> SamplingResult<String> {
        self.store.serialize()
    }

    /// Run one recomputation for the selected mode
    pub fn recompute(&mut self, params: &PipelineParams) -> SamplingResult<Cycle> {
        SamplingRatio::bounded(params.ratio.value(), self.config.max_ratio)?;

        let (source_name, clean) = match params.mode {
            SignalMode::Imported => {
                let signal = self.imported.as_ref().ok_or(SamplingError::NoSignalLoaded)?;
                (signal.name().to_string(), signal.series()?)
            }
            SignalMode::Composed => {
                let source = ComposedSignal::new(&self.store, self.config.composed_grid);
                (source.name().to_string(), source.series()?)
            }
        };

        let raw = match params.snr_db {
            Some(snr_db) => {
                let noise = &mut self.noise;
                let noisy = self
                    .metrics
                    .track(Stage::Noise, || noise.add_noise(clean.amplitude(), snr_db))?;
                clean.with_amplitude(noisy)?
            }
            None => clean,
        };

        let ratio = params.ratio.as_f64();
        let (parameters, plan) = match params.mode {
            SignalMode::Imported => {
                let derived = self
                    .metrics
                    .track(Stage::Derive, || derive_from_time_series(&raw))?;
                let plan =
                    SamplingPlan::for_imported(&derived, ratio, &raw, self.config.max_samples)?;
                (Some(derived), plan)
            }
            SignalMode::Composed if self.store.is_empty() || params.ratio.is_zero() => {
                (None, SamplingPlan::disabled())
            }
            SignalMode::Composed => {
                let frequencies = self.store.frequencies();
                let span = self.config.composed_grid.span_secs;
                let derived = self.metrics.track(Stage::Derive, || {
                    derive_from_composition(&frequencies, ratio, span)
                })?;
                let plan = SamplingPlan::for_composed(&derived, self.config.max_samples)?;
                (Some(derived), plan)
            }
        };
        debug!("{:?} mode, ratio {}x: {:?}", params.mode, params.ratio.value(), plan);

        let outcome = run_stages(&raw, &plan, &self.metrics)?;
        self.sequence_id += 1;

        Ok(Cycle {
            source_name,
            raw,
            parameters,
            plan,
            ratio: params.ratio,
            outcome,
        })
    }

    /// Recompute and package the result for the plotting layer
    pub fn render(&mut self, params: &PipelineParams) -> SamplingResult<RenderFrame> {
        let cycle = self.recompute(params)?;
        Ok(cycle.to_frame(self.sequence_id))
    }
}
