//! Configuration structures and loading logic.

use crate::config::profile::ProfileSetting;
use crate::error::{Error, Result};
use crate::path::PlatformProfile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub path: PathConfig,

    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Path rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathConfig {
    /// Platform profile (native, posix, windows).
    #[serde(default)]
    pub profile: ProfileSetting,
}

/// Filename legalization configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Replacement for illegal filename characters. Empty deletes them.
    #[serde(default)]
    pub substitute: String,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Whether to print results as JSON.
    #[serde(default)]
    pub json: bool,

    /// Whether to colour console output.
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            color: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The effective platform profile.
    pub fn profile(&self) -> PlatformProfile {
        self.path.profile.resolve()
    }
}
