use super::error::SamplingResult;
use super::series::TimeSeries;

/// Base trait for anything that can supply the active signal
pub trait SignalSource {
    /// Label used for the raw series in logs and exports
    fn name(&self) -> &str;

    /// Produce the noiseless time/amplitude series
    fn series(&self) -> SamplingResult<TimeSeries>;
}
