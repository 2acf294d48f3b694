use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use log::info;
use tokio::fs;

use crate::sources::ComposedSignalStore;

/// A composition persisted as a flat JSON object on disk
pub struct CompositionFile {
    path: PathBuf,
}

impl CompositionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base file name, shown in the CLI summary
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string()
    }

    pub async fn save(&self, store: &ComposedSignalStore) -> Result<()> {
        let json = store.serialize()
            .context("Failed to serialize composition")?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, json).await
            .context(format!("Failed to write composition to {:?}", temp_path))?;
        fs::rename(&temp_path, &self.path).await
            .context(format!("Failed to move composition into {:?}", self.path))?;

        info!("Saved {} components to {:?}", store.len(), self.path);
        Ok(())
    }

    /// Merge the file's components into `store`
    pub async fn load_into(&self, store: &mut ComposedSignalStore) -> Result<()> {
        let json = fs::read_to_string(&self.path).await
            .context(format!("Failed to read composition from {:?}", self.path))?;

        store.deserialize(&json)
            .context(format!("Failed to load composition {:?}", self.path))?;

        info!("Loaded composition {:?}; store now holds {} components", self.path, store.len());
        Ok(())
    }
}
