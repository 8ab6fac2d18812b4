//! Config management use case

use crate::domain::Theme;
use crate::error::{DiaryError, Result};
use crate::infrastructure::{Config, DiaryRepository, FileSystemRepository};
use std::str::FromStr;

/// Service for managing diary configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "system_theme" => Ok(config.system_theme.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DiaryError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: system_theme, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "system_theme" => {
                config.system_theme = Theme::from_str(value).map_err(DiaryError::Config)?;
            }
            "created" => {
                return Err(DiaryError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DiaryError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: system_theme",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        ConfigService::new(repo)
    }

    #[test]
    fn test_get_and_set_system_theme() {
        let temp = TempDir::new().unwrap();
        let svc = service(&temp);

        assert_eq!(svc.get("system_theme").unwrap(), "light");
        svc.set("system_theme", "dark").unwrap();
        assert_eq!(svc.get("system_theme").unwrap(), "dark");
    }

    #[test]
    fn test_set_invalid_theme() {
        let temp = TempDir::new().unwrap();
        let svc = service(&temp);

        match svc.set("system_theme", "sepia") {
            Err(DiaryError::Config(msg)) => assert!(msg.contains("Invalid theme")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let svc = service(&temp);

        assert!(svc.get("created").is_ok());
        assert!(svc.set("created", "2020-01-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let svc = service(&temp);

        assert!(svc.get("editor").is_err());
        assert!(svc.set("editor", "vim").is_err());
    }
}
