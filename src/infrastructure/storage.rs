//! Key-value persistence adapters

use crate::error::{DiaryError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Durable string slots addressed by key.
///
/// Values are opaque blobs: callers read and overwrite whole values only.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if the slot is empty
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Clear the slot. Removing an empty slot is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    slots: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one slot
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.slots.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.slots.remove(key);
        Ok(())
    }
}

/// One file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: PathBuf) -> Self {
        FileKeyValueStore { dir }
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        log::debug!("Reading slot {:?}", path);

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DiaryError::Io(e)),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    /// The temp file is removed again if either step fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        log::debug!("Writing {} bytes to slot {:?}", value.len(), path);

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let tmp_path = self
            .dir
            .join(format!(".{}.tmp-{}", key, std::process::id()));

        if let Err(e) = write_then_rename(&tmp_path, &path, value) {
            log::warn!("Failed to write slot {:?}: {}", path, e);
            let _ = fs::remove_file(&tmp_path);
            return Err(DiaryError::Io(e));
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DiaryError::Io(e)),
        }
    }
}

/// On Windows, `rename` does not overwrite existing files, so the destination is removed first.
fn write_then_rename(tmp_path: &Path, path: &Path, value: &str) -> std::io::Result<()> {
    fs::write(tmp_path, value)?;

    #[cfg(windows)]
    {
        if path.exists() {
            fs::remove_file(path)?;
        }
    }

    fs::rename(tmp_path, path)
}

/// Keys become file names, so only `[A-Za-z0-9_.-]` is allowed and a key may not start with `.`
fn validate_key(key: &str) -> Result<()> {
    let valid_chars = key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if key.is_empty() || key.starts_with('.') || !valid_chars {
        return Err(DiaryError::InvalidKey(key.to_string()));
    }
    Ok(())
}
