//! File system repository

use crate::error::{DiaryError, Result};
use crate::infrastructure::config::DIARY_DIR;
use crate::infrastructure::{Config, FileKeyValueStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for diary operations
pub trait DiaryRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .serene/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .serene/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .serene directory exists
    fn is_initialized(&self) -> bool;

    /// Create .serene directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of DiaryRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover diary root by walking up from current directory
    /// First checks SERENE_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("SERENE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_diary_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(DiaryError::Config(format!(
                    "SERENE_ROOT is set to '{}' but no .serene directory found. \
                    Run 'serene init' in that directory or unset SERENE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover diary root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_diary_dir(&current) {
                log::debug!("Found diary root at {:?}", current);
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(DiaryError::NotDiaryDirectory(start.to_path_buf())),
            }
        }
    }

    /// Key-value storage backing entries and preferences
    pub fn storage(&self) -> FileKeyValueStore {
        FileKeyValueStore::new(self.storage_dir())
    }

    pub fn storage_dir(&self) -> PathBuf {
        self.root.join(DIARY_DIR).join("storage")
    }

    fn has_diary_dir(path: &Path) -> bool {
        path.join(DIARY_DIR).is_dir()
    }
}

impl DiaryRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_diary_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let diary_dir = self.root.join(DIARY_DIR);

        if diary_dir.exists() {
            return Err(DiaryError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&diary_dir)?;
        fs::create_dir(self.storage_dir())?;
        Ok(())
    }
}
