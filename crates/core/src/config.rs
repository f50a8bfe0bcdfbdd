//! Application configuration
//!
//! Loaded from `config.toml` in the platform config directory, or from the
//! path in `FILEGATE_CONFIG`. A missing file means defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::picker::DEFAULT_YEAR_SPAN;

pub const CONFIG_ENV: &str = "FILEGATE_CONFIG";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub timing: TimingConfig,
    pub picker: PickerConfig,
}

/// Simulated delays and notification lifetime, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub login_delay_ms: u64,
    pub submit_delay_ms: u64,
    pub toast_duration_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 1500,
            submit_delay_ms: 2000,
            toast_duration_ms: 5000,
        }
    }
}

impl TimingConfig {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Years offered before and after the current year
    pub year_span: u16,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            year_span: DEFAULT_YEAR_SPAN,
        }
    }
}

impl AppConfig {
    /// Load from the default location, falling back to defaults when no
    /// file exists there
    pub fn load() -> Result<(Self, Option<PathBuf>)> {
        let path = Self::config_path()?;
        if path.exists() {
            let config = Self::load_from(&path)?;
            Ok((config, Some(path)))
        } else {
            Ok((Self::default(), None))
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("dev", "filegate", "filegate").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;

        Ok(dirs.config_dir().join(CONFIG_FILE))
    }
}
