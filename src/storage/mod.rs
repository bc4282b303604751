//! Storage boundary
//!
//! The shop keeps its whole persistent state as JSON values under four fixed
//! string keys. [`Storage`] is the raw adapter over whatever holds those
//! blobs; [`load`] and [`save`] are the typed boundary the repositories go
//! through, so malformed stored JSON is rejected at the edge instead of
//! leaking half-decoded records into views.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    io,
    path::PathBuf,
};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// The fixed keys the shop persists under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// The shopper's in-progress cart: an array of engine snapshots.
    Cart,
    /// All placed orders.
    Orders,
    /// The admin-managed catalog.
    Engines,
    /// The remembered customer identity, if any.
    User,
}

impl StorageKey {
    /// The string key the value is stored under.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Orders => "orders",
            Self::Engines => "engines",
            Self::User => "user",
        }
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Errors from the storage boundary.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store could not be prepared.
    #[error("failed to prepare storage directory {path}")]
    Directory {
        /// Directory that could not be created or opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading or writing the backing store failed.
    #[error("failed to access stored value for `{key}`")]
    Io {
        /// Key being accessed.
        key: StorageKey,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The stored value exists but does not decode to the expected shape.
    #[error("stored value for `{key}` is corrupt")]
    Corrupt {
        /// Key holding the corrupt value.
        key: StorageKey,
        /// Decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for storage.
    #[error("failed to encode value for `{key}`")]
    Encode {
        /// Key being written.
        key: StorageKey,
        /// Encode failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Raw key-value adapter over the local store.
///
/// No schema enforcement lives here; callers go through [`load`] / [`save`]
/// for that. Absent keys read as `None`.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read or the stored
    /// bytes are not JSON at all.
    fn get(&self, key: StorageKey) -> Result<Option<Value>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be written.
    fn set(&self, key: StorageKey, value: Value) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be written.
    fn remove(&self, key: StorageKey) -> Result<(), StorageError>;
}

/// Load and decode the value stored under `key`.
///
/// Absence is `Ok(None)`; a present but malformed value is
/// [`StorageError::Corrupt`].
///
/// # Errors
///
/// Returns an error when the store cannot be read or the stored value does
/// not decode as `T`.
pub fn load<T: DeserializeOwned>(
    storage: &dyn Storage,
    key: StorageKey,
) -> Result<Option<T>, StorageError> {
    match storage.get(key)? {
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|source| StorageError::Corrupt { key, source }),
        None => Ok(None),
    }
}

/// Encode `value` and store it under `key`.
///
/// # Errors
///
/// Returns an error when encoding fails or the store cannot be written.
pub fn save<T: Serialize + ?Sized>(
    storage: &dyn Storage,
    key: StorageKey,
    value: &T,
) -> Result<(), StorageError> {
    let encoded = serde_json::to_value(value).map_err(|source| StorageError::Encode { key, source })?;

    storage.set(key, encoded)
}
