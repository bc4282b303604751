//! Catalog repository.

use crate::{
    domain::engines::{data, models::Engine},
    storage::{self, Storage, StorageError, StorageKey},
};

/// Raw persistence for the admin-managed catalog under `engines`.
///
/// The built-in seed is never written back by reads; `active` serves it only
/// while no admin catalog exists.
#[derive(Debug, Clone, Default)]
pub(crate) struct EnginesRepository;

impl EnginesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// The persisted admin catalog, if any admin mutation has happened.
    pub(crate) fn stored(&self, storage: &dyn Storage) -> Result<Option<Vec<Engine>>, StorageError> {
        storage::load(storage, StorageKey::Engines)
    }

    /// The catalog the storefront and admin panel read: the persisted list
    /// when present, otherwise the seed.
    pub(crate) fn active(&self, storage: &dyn Storage) -> Result<Vec<Engine>, StorageError> {
        Ok(self.stored(storage)?.unwrap_or_else(data::seed_catalog))
    }

    pub(crate) fn save(&self, storage: &dyn Storage, engines: &[Engine]) -> Result<(), StorageError> {
        storage::save(storage, StorageKey::Engines, engines)
    }
}
