pub mod core;
pub mod dsp;
pub mod engine;
pub mod observability;
pub mod sources;
pub mod storage;
