//! File-backed storage backend.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::Value;

use super::{Storage, StorageError, StorageKey};

/// Storage backend keeping one `<key>.json` file per key in a directory.
///
/// This is the durable analogue of the browser store the shop originally ran
/// on: single process, last write wins, no cross-process coordination.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a storage directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();

        fs::create_dir_all(&dir).map_err(|source| StorageError::Directory {
            path: dir.clone(),
            source,
        })?;

        Ok(Self { dir })
    }

    /// The directory values are persisted in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: StorageKey) -> Result<Option<Value>, StorageError> {
        let contents = match fs::read_to_string(self.path(key)) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StorageError::Io { key, source }),
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| StorageError::Corrupt { key, source })
    }

    fn set(&self, key: StorageKey, value: Value) -> Result<(), StorageError> {
        let encoded =
            serde_json::to_vec_pretty(&value).map_err(|source| StorageError::Encode { key, source })?;

        fs::write(self.path(key), encoded).map_err(|source| StorageError::Io { key, source })
    }

    fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { key, source }),
        }
    }
}
