//! Directory-backed implementation of the `KeyValueStore` trait.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;
use undercover_core::error::StorageError;
use undercover_core::storage::KeyValueStore;

/// Stores each key as `<root>/<key>.json`.
///
/// Writes go to a temporary file in the same directory that is then
/// renamed over the target, so a crash mid-write leaves the previous
/// payload intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `root`. The directory is created lazily on
    /// the first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the stored files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::Backend(format!("invalid storage key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored payload");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;

        let mut temp_file = NamedTempFile::new_in(&self.root)?;
        temp_file.write_all(bytes)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&path).map_err(|e| e.error)?;

        debug!(path = %path.display(), len = bytes.len(), "payload saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert_eq!(store.load("who_is_spy_used_words").unwrap(), None);
    }

    #[test]
    fn test_save_then_load_returns_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.save("used", b"[1,2]").unwrap();

        assert_eq!(store.load("used").unwrap().as_deref(), Some(&b"[1,2]"[..]));
        assert!(dir.path().join("used.json").is_file());
    }

    #[test]
    fn test_save_replaces_previous_payload() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.save("used", b"[1,2,3]").unwrap();
        store.save("used", b"[]").unwrap();

        assert_eq!(store.load("used").unwrap().as_deref(), Some(&b"[]"[..]));
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::new(&nested);

        store.save("used", b"[]").unwrap();

        assert!(nested.join("used.json").is_file());
    }

    #[test]
    fn test_save_leaves_no_temporary_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.save("used", b"[4]").unwrap();
        store.save("used", b"[4,5]").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("used.json")]);
    }

    #[test]
    fn test_invalid_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        for key in ["", "../escape", "a/b", "with space"] {
            assert!(matches!(
                store.save(key, b"[]"),
                Err(StorageError::Backend(_))
            ));
            assert!(matches!(store.load(key), Err(StorageError::Backend(_))));
        }
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("used.json")).unwrap();
        let store = FileStore::new(dir.path());

        assert!(matches!(store.load("used"), Err(StorageError::Io(_))));
    }
}
