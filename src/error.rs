//! Error types for serene

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for serene application
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("Not a serene directory: {0}")]
    NotDiaryDirectory(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Empty entry: a title or some content is required")]
    EmptyEntry,

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DiaryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaryError::NotDiaryDirectory(_) => 2,
            DiaryError::EntryNotFound(_) => 3,
            DiaryError::EmptyEntry => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaryError::NotDiaryDirectory(path) => {
                format!(
                    "Not a serene directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'serene init' in this directory to create a new diary\n\
                    • Navigate to an existing serene directory\n\
                    • Set SERENE_ROOT environment variable to your diary path",
                    path.display()
                )
            }
            DiaryError::EntryNotFound(id) => {
                format!(
                    "No entry with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'serene list' to see entry ids\n\
                    • Use 'serene list --search <text>' to find an entry by title or content",
                    id
                )
            }
            DiaryError::EmptyEntry => "Please write something before saving.\n\n\
                Example:\n\
                serene new --title 'Morning' --content 'Felt **great**'"
                .to_string(),
            DiaryError::InvalidImage(msg) => {
                format!(
                    "{}\n\n\
                    Supported image types: png, jpg, jpeg, gif, webp, svg, bmp",
                    msg
                )
            }
            DiaryError::Config(msg) => {
                if msg.contains("Invalid theme") {
                    format!(
                        "{}\n\n\
                        Valid themes: light, dark\n\
                        Example: serene theme dark",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            DiaryError::TomlDeserialize(e) => {
                format!(
                    "Failed to read .serene/config.toml: {}\n\n\
                    Suggestions:\n\
                    • Fix the file by hand, or use 'serene config <key> <value>'\n\
                    • Valid keys: system_theme, created",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;
