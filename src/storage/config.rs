use std::path::PathBuf;
use anyhow::{Result, Context};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::engine::control::{MAX_RATIO, MAX_SAMPLES};
use crate::sources::GridConfig;

/// Tunables of a sandbox session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Synthesis grid for composed signals
    pub composed_grid: GridConfig,
    /// Largest sampling ratio accepted
    pub max_ratio: u8,
    /// Fixed seed for reproducible noise; entropy when absent
    pub noise_seed: Option<u64>,
    /// Most markers a single cycle may draw
    pub max_samples: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            composed_grid: GridConfig::default(),
            max_ratio: MAX_RATIO,
            noise_seed: None,
            max_samples: MAX_SAMPLES,
        }
    }
}

/// Reads and writes `SessionConfig` as JSON
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub async fn ensure_config_file(&self) -> Result<()> {
        if !self.config_path.exists() {
            if let Some(parent) = self.config_path.parent() {
                fs::create_dir_all(parent).await
                    .context("Failed to create config directory")?;
            }

            let json = serde_json::to_string_pretty(&SessionConfig::default())?;
            fs::write(&self.config_path, json).await
                .context("Failed to write default config")?;
        }

        Ok(())
    }

    /// Load the config, writing the defaults first if the file is missing
    pub async fn load(&self) -> Result<SessionConfig> {
        self.ensure_config_file().await?;

        let content = fs::read_to_string(&self.config_path).await
            .context("Failed to read config file")?;

        let config: SessionConfig = serde_json::from_str(&content)
            .context("Failed to parse config JSON")?;

        Ok(config)
    }

    pub async fn save(&self, config: &SessionConfig) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;

        let temp_path = self.config_path.with_extension("tmp");
        fs::write(&temp_path, json).await
            .context("Failed to write temporary config file")?;

        fs::rename(&temp_path, &self.config_path).await
            .context("Failed to atomically update config file")?;

        Ok(())
    }
}
