use thiserror::Error;

/// Failures raised by the sampling engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    #[error("Need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Malformed composition: {0}")]
    MalformedComposition(String),

    #[error("Division by zero: {0}")]
    DivisionByZero(&'static str),

    #[error("Target {target} lies outside the source domain [{min}, {max}]")]
    Extrapolation { target: f64, min: f64, max: f64 },

    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Grid is not strictly increasing at index {index}")]
    UnsortedGrid { index: usize },

    #[error("Invalid SNR: {0} dB")]
    InvalidSnr(f64),

    #[error("Sampling ratio {ratio} outside 0..={max}")]
    RatioOutOfRange { ratio: u8, max: u8 },

    #[error("No imported signal loaded")]
    NoSignalLoaded,

    #[error("No free component keys left")]
    KeysExhausted,

    #[error("Requested {requested} samples, limit is {limit}")]
    TooManySamples { requested: f64, limit: usize },
}

pub type SamplingResult<T> = std::result::Result<T, SamplingError>;
