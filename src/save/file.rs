//! File-backed save provider.
//!
//! Persists the key-value map as a single JSON object. Writes are buffered in
//! memory and hit the disk on `save()`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::SaveProvider;

/// Save provider backed by a JSON file.
pub struct FileSaveProvider {
    path: PathBuf,
    values: HashMap<String, f32>,
    dirty: bool,
}

impl FileSaveProvider {
    /// Open a provider at `path`, loading existing values if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SaveError> {
        let path = path.into();

        let values = if path.exists() {
            let content =
                std::fs::read_to_string(&path).map_err(|e| SaveError::IoError(e.to_string()))?;
            serde_json::from_str(&content).map_err(|e| SaveError::ParseError(e.to_string()))?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            values,
            dirty: false,
        })
    }

    /// Default save file location under the platform data directory.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "timetrial", "TimeTrial")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("save.json")
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are writes not yet flushed to disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn flush(&mut self) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SaveError::IoError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(&self.values)
            .map_err(|e| SaveError::SerializeError(e.to_string()))?;

        std::fs::write(&self.path, content).map_err(|e| SaveError::IoError(e.to_string()))?;

        self.dirty = false;
        Ok(())
    }
}

impl SaveProvider for FileSaveProvider {
    fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get_float(&self, key: &str, default_value: f32) -> f32 {
        self.values.get(key).copied().unwrap_or(default_value)
    }

    fn set_float(&mut self, key: &str, value: f32) {
        self.values.insert(key.to_string(), value);
        self.dirty = true;
    }

    fn save(&mut self) {
        // The store owns its failures; the race core treats save() as fire
        // and forget.
        if let Err(e) = self.flush() {
            tracing::error!("Failed to flush save file {:?}: {e}", self.path);
        }
    }
}

/// Save file errors.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileSaveProvider::open(dir.path().join("save.json")).unwrap();

        assert!(!provider.has_key("BEST_TIME_SECONDS"));
        assert_eq!(provider.get_float("BEST_TIME_SECONDS", 99.0), 99.0);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");

        let mut provider = FileSaveProvider::open(&path).unwrap();
        provider.set_float("BEST_TIME_SECONDS", 12.5);
        assert!(provider.is_dirty());
        provider.save();
        assert!(!provider.is_dirty());

        let reloaded = FileSaveProvider::open(&path).unwrap();
        assert!(reloaded.has_key("BEST_TIME_SECONDS"));
        assert_eq!(reloaded.get_float("BEST_TIME_SECONDS", -1.0), 12.5);
    }

    #[test]
    fn test_unflushed_writes_do_not_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");

        let mut provider = FileSaveProvider::open(&path).unwrap();
        provider.set_float("BEST_TIME_SECONDS", 3.0);
        drop(provider);

        let reloaded = FileSaveProvider::open(&path).unwrap();
        assert!(!reloaded.has_key("BEST_TIME_SECONDS"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        std::fs::write(&path, "not json").unwrap();

        let result = FileSaveProvider::open(&path);
        assert!(matches!(result, Err(SaveError::ParseError(_))));
    }
}
