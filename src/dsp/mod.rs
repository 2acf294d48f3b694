pub mod noise;
pub mod params;
pub mod reconstruct;
pub mod residual;
pub mod sampler;
pub mod spline;

pub use noise::NoiseInjector;
pub use params::{derive_from_composition, derive_from_time_series, DerivedParameters};
pub use reconstruct::{reconstruct, resample, sinc};
pub use residual::{compute_error, ErrorSummary};
pub use sampler::{sample, SampleSet};
pub use spline::CubicSpline;
