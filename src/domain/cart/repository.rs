//! Cart repository.

use crate::{
    domain::engines::models::Engine,
    storage::{self, Storage, StorageError, StorageKey},
};

/// Raw persistence for the cart sequence under `cart`. An absent key reads
/// as an empty cart.
#[derive(Debug, Clone, Default)]
pub(crate) struct CartRepository;

impl CartRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn load(&self, storage: &dyn Storage) -> Result<Vec<Engine>, StorageError> {
        Ok(storage::load(storage, StorageKey::Cart)?.unwrap_or_default())
    }

    pub(crate) fn save(&self, storage: &dyn Storage, items: &[Engine]) -> Result<(), StorageError> {
        storage::save(storage, StorageKey::Cart, items)
    }
}
