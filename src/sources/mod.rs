pub mod composition;
pub mod imported;

pub use composition::{ComposedSignal, ComposedSignalStore, GridConfig, SignalComponent};
pub use imported::ImportedSignal;
