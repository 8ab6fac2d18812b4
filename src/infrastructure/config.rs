//! Configuration management

use crate::domain::Theme;
use crate::error::{DiaryError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Name of the directory holding config and storage
pub const DIARY_DIR: &str = ".serene";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Preference reported by the platform, used when no theme has been chosen
    #[serde(default)]
    pub system_theme: Theme,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            system_theme: Theme::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .serene/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DIARY_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiaryError::NotDiaryDirectory(path.to_path_buf())
            } else {
                DiaryError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .serene/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let diary_dir = path.join(DIARY_DIR);
        let config_path = diary_dir.join("config.toml");

        if !diary_dir.exists() {
            fs::create_dir(&diary_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Platform theme preference, checking SERENE_SYSTEM_THEME first
    pub fn get_system_theme(&self) -> Theme {
        std::env::var("SERENE_SYSTEM_THEME")
            .ok()
            .and_then(|value| Theme::from_str(&value).ok())
            .unwrap_or(self.system_theme)
    }
}
