//! # Configuration
//!
//! User-tunable behaviour, stored as `config.json` in the data directory.
//! A missing file or a missing field falls back to the defaults below.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `shell-extensions` | `.rdp,.bat` | Extensions launched through the platform shell |
//! | `default-appearance` | `Dark` | Appearance shown when none has been chosen |
//!
//! The config is read by the initialization layer; the core receives a
//! [`LaunchPolicy`] and a default mode, never the file itself.

use crate::error::{Result, WorklaunchError};
use crate::launch::{LaunchPolicy, DEFAULT_SHELL_EXTENSIONS};
use crate::model::AppearanceMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";

pub const SHELL_EXTENSIONS_KEY: &str = "shell-extensions";
pub const DEFAULT_APPEARANCE_KEY: &str = "default-appearance";

/// Field names in `config.json` are the same kebab-case keys the `config`
/// command takes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct WorklaunchConfig {
    #[serde(default = "default_shell_extensions")]
    pub shell_extensions: Vec<String>,

    #[serde(default)]
    pub default_appearance: AppearanceMode,
}

fn default_shell_extensions() -> Vec<String> {
    DEFAULT_SHELL_EXTENSIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for WorklaunchConfig {
    fn default() -> Self {
        Self {
            shell_extensions: default_shell_extensions(),
            default_appearance: AppearanceMode::default(),
        }
    }
}

impl WorklaunchConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WorklaunchError::Io)?;
        serde_json::from_str(&content).map_err(|e| WorklaunchError::StorageCorrupt {
            location: config_path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(WorklaunchError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(WorklaunchError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(WorklaunchError::Io)?;
        Ok(())
    }

    pub fn launch_policy(&self) -> LaunchPolicy {
        LaunchPolicy::new(&self.shell_extensions)
    }

    /// Display value of `key`, or `None` if the key is unknown.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            SHELL_EXTENSIONS_KEY => Some(self.shell_extensions.join(",")),
            DEFAULT_APPEARANCE_KEY => Some(self.default_appearance.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            SHELL_EXTENSIONS_KEY => {
                self.shell_extensions = LaunchPolicy::new(value.split(','))
                    .shell_extensions()
                    .to_vec();
                Ok(())
            }
            DEFAULT_APPEARANCE_KEY => {
                self.default_appearance = value.parse()?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        [SHELL_EXTENSIONS_KEY, DEFAULT_APPEARANCE_KEY]
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }
}
