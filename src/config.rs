//! Global configuration management
//!
//! User defaults for the command line, stored at
//! `~/.config/brdoc/config.toml`. A missing or unreadable file means
//! defaults; command-line flags always win over the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// Global brdoc configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Defaults for `brdoc generate`
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// Defaults for generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Print generated values in masked form
    #[serde(default)]
    pub masked: bool,
    /// How many values to generate
    #[serde(default = "default_count")]
    pub count: usize,
}

const fn default_count() -> usize {
    1
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            masked: false,
            count: default_count(),
        }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or use defaults if it does not exist
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file, falling back to defaults
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            fs::read_to_string(path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save config to a specific file, creating its directory
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
