use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Editor configuration
///
/// A single optional `config.json` in the user directory. A missing file
/// just means defaults; nothing else is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Extensions skipped at startup, by name
    #[serde(default)]
    pub disabled_extensions: Vec<String>,
}

impl Config {
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled_extensions.iter().any(|n| n == name)
    }
}

/// Configuration manager
pub struct ConfigManager {
    /// The config
    config: Config,

    /// The path to the config file
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager
    pub fn new(config_dir: &Path) -> Self {
        Self {
            config: Config::default(),
            config_path: config_dir.join("config.json"),
        }
    }

    /// Load the config, keeping defaults when the file does not exist.
    pub fn load(&mut self) -> Result<()> {
        if self.config_path.exists() {
            let config_str = fs::read_to_string(&self.config_path)?;
            self.config = serde_json::from_str(&config_str)
                .map_err(|e| anyhow!("Failed to parse config: {}", e))?;
        }
        Ok(())
    }

    /// Save the config, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let config_str = serde_json::to_string_pretty(&self.config)?;
        fs::write(&self.config_path, config_str)?;
        Ok(())
    }

    /// Get the config
    pub fn get_config(&self) -> &Config {
        &self.config
    }

    /// Get a mutable reference to the config
    pub fn get_config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Consume the manager, keeping only the loaded config.
    pub fn into_config(self) -> Config {
        self.config
    }
}
