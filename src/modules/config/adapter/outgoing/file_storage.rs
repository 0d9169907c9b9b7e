use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::modules::config::application::ports::outgoing::storage::{
    KeyValueStorage, StorageError,
};

/// File-backed key-value storage: one JSON file per key under a data
/// directory. This is the durable analog of browser local storage for a
/// single-user, single-profile tool.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|e| StorageError::WriteFailed(format!("{}: {e}", root.display())))?;
        Ok(Self { root })
    }

    fn file_for(&self, key: &str) -> PathBuf {
        // Keys are well-known identifiers, not user input; strip anything
        // that would escape the data directory.
        let safe: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.root.join(format!("{safe}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.file_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(format!("{key}: {e}"))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.file_for(key), value)
            .map_err(|e| StorageError::WriteFailed(format!("{key}: {e}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.file_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::WriteFailed(format!("{key}: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_then_get_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        storage.set("portfolioConfig", "{\"a\":1}").unwrap();
        assert_eq!(
            storage.get("portfolioConfig").unwrap(),
            Some("{\"a\":1}".to_string())
        );
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        assert_eq!(storage.get("portfolioConfig").unwrap(), None);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        storage.set("sharedPortfolios", "{}").unwrap();
        storage.remove("sharedPortfolios").unwrap();
        storage.remove("sharedPortfolios").unwrap();
        assert_eq!(storage.get("sharedPortfolios").unwrap(), None);
    }

    #[test]
    fn test_keys_cannot_escape_the_data_directory() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        storage.set("../escape", "x").unwrap();
        assert!(dir.path().join("___escape.json").exists());
    }
}
