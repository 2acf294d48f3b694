pub mod error;
pub mod frame;
pub mod series;
pub mod source;

pub use error::{SamplingError, SamplingResult};
pub use frame::{PlotSeries, RenderFrame};
pub use series::{linspace, TimeSeries};
pub use source::SignalSource;
