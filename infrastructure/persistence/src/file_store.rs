use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use business::domain::errors::StorageError;
use business::domain::session::storage::LocalStore;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("persistence.read_error: {0}")]
    ReadError(String),
    #[error("persistence.corrupted_file: {0}")]
    CorruptedFile(String),
}

/// Key/value store kept as a flat JSON object in one file.
///
/// The file is read once on open; every write rewrites it through a
/// temporary sibling file followed by a rename.
pub struct FileLocalStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileLocalStore {
    /// Opens the store, starting empty when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| PersistenceError::CorruptedFile(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(PersistenceError::ReadError(format!(
                    "{}: {}",
                    path.display(),
                    e
                )));
            }
        };

        tracing::debug!("Opened local store at {} ({} keys)", path.display(), entries.len());
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let write_failed = |e: std::io::Error| {
            StorageError::WriteFailed(format!("{}: {}", self.path.display(), e))
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        let staging = self.path.with_extension("tmp");
        fs::write(&staging, json).map_err(write_failed)?;
        fs::rename(&staging, &self.path).map_err(write_failed)
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LocalStore for FileLocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries();
        let previous = entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush(&entries) {
            // Keep memory and disk in agreement.
            match previous {
                Some(old) => entries.insert(key.to_string(), old),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries();
        let Some(previous) = entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.flush(&entries) {
            entries.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("storefront-test-{}", uuid::Uuid::new_v4()))
            .join("local-store.json")
    }

    #[test]
    fn should_start_empty_when_file_is_missing() {
        let store = FileLocalStore::open(scratch_path()).unwrap();
        assert_eq!(store.get("lsToken"), None);
    }

    #[test]
    fn should_persist_values_across_reopen() {
        let path = scratch_path();
        {
            let store = FileLocalStore::open(&path).unwrap();
            store.set("lsToken", "tok").unwrap();
            store.set("isLoggedIn", "true").unwrap();
        }

        let reopened = FileLocalStore::open(&path).unwrap();

        assert_eq!(reopened.get("lsToken").as_deref(), Some("tok"));
        assert_eq!(reopened.get("isLoggedIn").as_deref(), Some("true"));
    }

    #[test]
    fn should_remove_value_from_disk() {
        let path = scratch_path();
        let store = FileLocalStore::open(&path).unwrap();
        store.set("userIDToken", "user-1").unwrap();

        store.remove("userIDToken").unwrap();

        assert_eq!(store.get("userIDToken"), None);
        assert_eq!(FileLocalStore::open(&path).unwrap().get("userIDToken"), None);
    }

    #[test]
    fn should_ignore_removal_of_unknown_key() {
        let store = FileLocalStore::open(scratch_path()).unwrap();
        assert!(store.remove("missing").is_ok());
    }

    #[test]
    fn should_reject_corrupted_file() {
        let path = scratch_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let result = FileLocalStore::open(&path);

        assert!(matches!(result, Err(PersistenceError::CorruptedFile(_))));
    }
}
