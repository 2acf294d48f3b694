pub mod composition_file;
pub mod config;

pub use composition_file::CompositionFile;
pub use config::{ConfigManager, SessionConfig};
