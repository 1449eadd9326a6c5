//! Key/value storage backing the favorites.
//!
//! Values are opaque strings, like browser local storage. [`FileStorage`]
//! keeps every key in one JSON object on disk.

use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs2::FileExt;
use parking_lot::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read storage file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage file '{path}' is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write storage file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Durable string-keyed storage.
pub trait KeyValueStorage: Send {
    /// Returns `Ok(None)` when the key was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage file holding a JSON object of string values.
///
/// Writes replace the file through a temp file + rename while holding an
/// exclusive lock on `<file>.lock`, so two running instances never interleave.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location under the user data directory.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("favmoji").join("storage.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| StorageError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            source: e,
        })
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let write_error = |source: std::io::Error| StorageError::WriteError {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        let encoded = serde_json::to_string_pretty(items).map_err(|e| StorageError::Encode {
            key: "*".to_string(),
            source: e,
        })?;

        let tmp_path = self.path.with_extension("json.tmp");
        let mut tmp = File::create(&tmp_path).map_err(write_error)?;
        tmp.write_all(encoded.as_bytes()).map_err(write_error)?;
        tmp.sync_all().map_err(write_error)?;
        fs::rename(&tmp_path, &self.path).map_err(write_error)?;
        Ok(())
    }

    fn lock(&self) -> Result<File, StorageError> {
        let lock_path = self.path.with_extension("lock");
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::WriteError {
                path: lock_path.clone(),
                source: e,
            })?;
        }
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| StorageError::WriteError {
                path: lock_path.clone(),
                source: e,
            })?;
        file.lock_exclusive().map_err(|e| StorageError::WriteError {
            path: lock_path,
            source: e,
        })?;
        Ok(file)
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let lock = self.lock()?;
        // A corrupt file would otherwise block every future write.
        let mut items = match self.read_all() {
            Ok(items) => items,
            Err(StorageError::Corrupt { path, source }) => {
                tracing::warn!(path = %path.display(), "Replacing corrupt storage file: {}", source);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        items.insert(key.to_string(), value.to_string());
        let result = self.write_all(&items);
        drop(lock);
        result
    }
}

/// In-process storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.lock().get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("storage.json"));
        assert_eq!(storage.get_item("favEmojis").unwrap(), None);
    }

    #[test]
    fn set_then_get_survives_new_instance() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("storage.json");
        let mut storage = FileStorage::new(path.clone());
        storage.set_item("favEmojis", r#"["cat"]"#).unwrap();
        storage.set_item("other", "1").unwrap();

        let reopened = FileStorage::new(path);
        assert_eq!(
            reopened.get_item("favEmojis").unwrap().as_deref(),
            Some(r#"["cat"]"#)
        );
        assert_eq!(reopened.get_item("other").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn corrupt_file_is_reported_then_replaced_on_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, "{ not json").unwrap();

        let mut storage = FileStorage::new(path);
        assert!(matches!(
            storage.get_item("favEmojis"),
            Err(StorageError::Corrupt { .. })
        ));

        storage.set_item("favEmojis", "[]").unwrap();
        assert_eq!(storage.get_item("favEmojis").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn write_releases_lock() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        let mut storage = FileStorage::new(path.clone());
        storage.set_item("favEmojis", r#"["cat"]"#).unwrap();

        let lock_file = File::open(path.with_extension("lock")).unwrap();
        lock_file.try_lock_exclusive().unwrap();
        FileExt::unlock(&lock_file).unwrap();

        storage.set_item("favEmojis", r#"["dog"]"#).unwrap();
    }

    #[test]
    fn memory_storage_clones_share_items() {
        let storage = MemoryStorage::new();
        let mut writer = storage.clone();
        writer.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
    }
}
