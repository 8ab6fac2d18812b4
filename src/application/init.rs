//! Initialize diary use case

use crate::domain::Theme;
use crate::error::Result;
use crate::infrastructure::{Config, DiaryRepository, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new diary at the specified path.
pub fn init(path: &Path, system_theme: Theme) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config {
        system_theme,
        ..Config::new()
    };
    repo.save_config(&config)?;

    log::info!("Initialized diary at {:?}", path);
    println!("Initialized serene diary at {}", path.display());

    Ok(())
}
