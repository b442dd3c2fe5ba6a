//! store::json_file
//!
//! File-backed list storage in JSON format.
//!
//! # Format
//!
//! The store is a single JSON array of strings:
//!
//! ```json
//! ["0000", "1234", "1111", "9999"]
//! ```
//!
//! # Durability
//!
//! All writes are atomic: content is written to a sibling temp file,
//! synced to disk, then renamed over the store path. A crash mid-save
//! leaves either the old store or the new one, never a truncated mix.
//!
//! # Example
//!
//! ```no_run
//! use pingen::store::{JsonFileStore, ListStore};
//!
//! let store = JsonFileStore::new("used-numbers.json");
//! store.save(&["0042".to_string()])?;
//!
//! let items = store.load()?;
//! assert_eq!(items, vec!["0042".to_string()]);
//! # Ok::<(), pingen::store::StoreError>(())
//! ```

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::traits::{ListStore, StoreError};

/// File-backed list store using the JSON array-of-strings format.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Path to the store file
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store bound to the given file path.
    ///
    /// The file itself is not created until the first [`ListStore::save`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ListStore for JsonFileStore {
    fn save(&self, items: &[String]) -> Result<(), StoreError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let content =
            serde_json::to_string(items).map_err(|e| StoreError::Serialize(e.to_string()))?;

        // Write to a temp file first for atomicity
        let temp_path = self.path.with_extension("tmp");

        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(|e| self.io_error(e))?;

            file.write_all(content.as_bytes())
                .map_err(|e| self.io_error(e))?;

            file.sync_all().map_err(|e| self.io_error(e))?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(|e| self.io_error(e))
    }

    fn load(&self) -> Result<Vec<String>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn delete(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonFileStore) {
        let temp = TempDir::new().expect("create temp dir");
        let path = temp.path().join("list.json");
        let store = JsonFileStore::new(path);
        (temp, store)
    }

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (_temp, store) = create_test_store();

        let list = items(&["0000", "1234", "0042"]);
        store.save(&list).expect("save");

        let loaded = store.load().expect("load");
        assert_eq!(loaded, list);
    }

    #[test]
    fn save_preserves_order() {
        let (_temp, store) = create_test_store();

        let list = items(&["9999", "0001", "5000", "0001"]);
        store.save(&list).expect("save");

        assert_eq!(store.load().expect("load"), list);
    }

    #[test]
    fn load_missing_is_not_found() {
        let (_temp, store) = create_test_store();

        let err = store.load().unwrap_err();
        assert!(err.is_not_found(), "expected NotFound, got: {}", err);
    }

    #[test]
    fn load_corrupt_is_distinct_error() {
        let (_temp, store) = create_test_store();

        fs::write(store.path(), "this is not json").expect("write garbage");

        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }), "got: {}", err);
        assert!(!err.is_not_found());
    }

    #[test]
    fn load_wrong_shape_is_corrupt() {
        let (_temp, store) = create_test_store();

        // Valid JSON, wrong shape: an object rather than an array of strings
        fs::write(store.path(), r#"{"pins": ["0000"]}"#).expect("write wrong shape");

        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }), "got: {}", err);
    }

    #[test]
    fn save_overwrites_prior_content() {
        let (_temp, store) = create_test_store();

        store.save(&items(&["0001", "0002"])).expect("first save");
        store.save(&items(&["0003"])).expect("second save");

        assert_eq!(store.load().expect("load"), items(&["0003"]));
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let (_temp, store) = create_test_store();

        store.save(&items(&["0001"])).expect("save");

        assert!(!store.path().with_extension("tmp").exists());
    }

    #[test]
    fn save_creates_parent_directory() {
        let temp = TempDir::new().expect("create temp dir");
        let path = temp.path().join("nested").join("list.json");
        let store = JsonFileStore::new(path.clone());

        assert!(!path.parent().unwrap().exists());

        store.save(&items(&["0001"])).expect("save");

        assert!(path.exists());
    }

    #[test]
    fn delete_is_idempotent() {
        let (_temp, store) = create_test_store();

        store.save(&items(&["0001"])).expect("save");
        store.delete().expect("delete existing");
        assert!(!store.exists());

        // Deleting again must still succeed
        store.delete().expect("delete absent");
    }

    #[test]
    fn exists_tracks_lifecycle() {
        let (_temp, store) = create_test_store();

        assert!(!store.exists());
        store.save(&[]).expect("save empty");
        assert!(store.exists());
        store.delete().expect("delete");
        assert!(!store.exists());
    }

    #[test]
    fn empty_list_roundtrips() {
        let (_temp, store) = create_test_store();

        store.save(&[]).expect("save");
        assert_eq!(store.load().expect("load"), Vec::<String>::new());
    }
}
