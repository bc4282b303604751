//! In-memory storage backend.

use std::sync::{PoisonError, RwLock};

use rustc_hash::FxHashMap;
use serde_json::Value;

use super::{Storage, StorageError, StorageKey};

/// Process-local storage backend.
///
/// The default backend for tests and for embedding the shop without a
/// directory to persist into. Values live only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<FxHashMap<StorageKey, Value>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: StorageKey) -> Result<Option<Value>, StorageError> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);

        Ok(entries.get(&key).cloned())
    }

    fn set(&self, key: StorageKey, value: Value) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        entries.insert(key, value);

        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        entries.remove(&key);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn set_overwrites_previous_value() -> TestResult {
        let storage = MemoryStorage::new();

        storage.set(StorageKey::User, json!({"phone": "1"}))?;
        storage.set(StorageKey::User, json!({"phone": "2"}))?;

        assert_eq!(storage.get(StorageKey::User)?, Some(json!({"phone": "2"})));

        Ok(())
    }

    #[test]
    fn remove_clears_the_key_and_tolerates_absence() -> TestResult {
        let storage = MemoryStorage::new();

        storage.set(StorageKey::User, json!({}))?;
        storage.remove(StorageKey::User)?;
        storage.remove(StorageKey::User)?;

        assert_eq!(storage.get(StorageKey::User)?, None);

        Ok(())
    }
}
