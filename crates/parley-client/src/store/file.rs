//! JSON-file backed store, the terminal counterpart of browser storage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{SessionStore, StoreError};

/// Keeps a flat `{ key: value }` JSON object on disk.
///
/// A missing file reads as an empty store. Writes go through a sibling
/// temp file and a rename so a crash never leaves a half-written file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", self.path.display())))
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(values)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "session store written");
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }

    fn clear(&self, key: &str) -> Result<(), StoreError> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut values = match self.load() {
            Ok(values) => values,
            // A corrupt file is replaced.
            Err(StoreError::Corrupt(_)) => BTreeMap::new(),
            Err(e) => return Err(e),
        };
        values.remove(key);
        self.save(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("session.json"));
        assert_eq!(store.get("thread_id").unwrap(), None);
    }

    #[test]
    fn set_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        FileStore::new(&path).set("thread_id", "abc").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("thread_id").unwrap().as_deref(), Some("abc"));
    }

    #[test]
    fn clear_removes_only_that_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("session.json"));
        store.set("thread_id", "abc").unwrap();
        store.set("other", "keep").unwrap();

        store.clear("thread_id").unwrap();
        assert_eq!(store.get("thread_id").unwrap(), None);
        assert_eq!(store.get("other").unwrap().as_deref(), Some("keep"));
    }

    #[test]
    fn clear_on_missing_file_does_not_create_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        FileStore::new(&path).clear("thread_id").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_is_reported_on_get() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = FileStore::new(&path).get("thread_id").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn clear_repairs_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileStore::new(&path);
        store.clear("thread_id").unwrap();
        assert_eq!(store.get("thread_id").unwrap(), None);
    }
}
