//! Key-value storage that outlives a single session
//!
//! Form values are persisted here between runs. The file-backed store keeps
//! every key in one JSON object on disk; the memory store is used when no
//! data directory is available.

use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

/// Errors raised by a [`KeyValueStore`]
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String key-value store
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Store backed by a single JSON file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location of the store file in the platform data directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "autovaluate", "autovaluate-tui")
            .map(|dirs| dirs.data_dir().join("storage.json"))
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-process store, lost when the program exits
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    mod file_store {
        use super::*;

        #[test]
        fn test_get_missing_file_returns_none() {
            let dir = TempDir::new().unwrap();
            let store = FileStore::new(dir.path().join("storage.json"));
            assert_eq!(store.get("anything").unwrap(), None);
        }

        #[test]
        fn test_set_then_get() {
            let dir = TempDir::new().unwrap();
            let store = FileStore::new(dir.path().join("storage.json"));

            store.set("form", r#"{"make":"audi"}"#).unwrap();

            assert_eq!(
                store.get("form").unwrap(),
                Some(r#"{"make":"audi"}"#.to_string())
            );
        }

        #[test]
        fn test_set_overwrites_previous_value() {
            let dir = TempDir::new().unwrap();
            let store = FileStore::new(dir.path().join("storage.json"));

            store.set("form", "first").unwrap();
            store.set("form", "second").unwrap();

            assert_eq!(store.get("form").unwrap(), Some("second".to_string()));
        }

        #[test]
        fn test_keys_are_independent() {
            let dir = TempDir::new().unwrap();
            let store = FileStore::new(dir.path().join("storage.json"));

            store.set("a", "1").unwrap();
            store.set("b", "2").unwrap();

            assert_eq!(store.get("a").unwrap(), Some("1".to_string()));
            assert_eq!(store.get("b").unwrap(), Some("2".to_string()));
        }

        #[test]
        fn test_creates_missing_parent_directories() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("nested").join("deeper").join("storage.json");
            let store = FileStore::new(&path);

            store.set("k", "v").unwrap();

            assert!(path.exists());
        }

        #[test]
        fn test_persists_across_instances() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("storage.json");

            FileStore::new(&path).set("k", "v").unwrap();

            assert_eq!(FileStore::new(&path).get("k").unwrap(), Some("v".to_string()));
        }

        #[test]
        fn test_corrupt_file_is_an_error() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("storage.json");
            fs::write(&path, "not json").unwrap();

            let result = FileStore::new(&path).get("k");

            assert!(matches!(result, Err(StorageError::Serialization(_))));
        }

        #[test]
        fn test_default_path_returns_option() {
            // Just test that the function doesn't panic
            let _path = FileStore::default_path();
        }
    }

    mod memory_store {
        use super::*;

        #[test]
        fn test_roundtrip() {
            let store = MemoryStore::default();
            assert_eq!(store.get("k").unwrap(), None);

            store.set("k", "v").unwrap();

            assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
        }
    }
}
