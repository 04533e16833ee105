//! Global repeatcal configuration.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RepeatError, RepeatResult};

static DEFAULT_STORE_PATH: &str = "~/calendar/events.json";

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

/// Global configuration at ~/.config/repeatcal/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GlobalConfig {
    /// End date for repeat rules without one. Falls back to `DEFAULT_HORIZON`.
    pub horizon: Option<NaiveDate>,

    /// JSON file that saved events are written to
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            horizon: None,
            store_path: default_store_path(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> RepeatResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RepeatError::Config("Could not determine config directory".into()))?
            .join("repeatcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, or defaults if there is no config file.
    pub fn load() -> RepeatResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> RepeatResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| RepeatError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Store path with a leading `~` expanded to the home directory.
    pub fn store_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.store_path.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }
}
