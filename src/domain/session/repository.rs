//! Session repository.

use crate::{
    domain::session::models::User,
    storage::{self, Storage, StorageError, StorageKey},
};

/// Raw persistence for the remembered identity under `user`.
#[derive(Debug, Clone, Default)]
pub(crate) struct SessionRepository;

impl SessionRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn load(&self, storage: &dyn Storage) -> Result<Option<User>, StorageError> {
        storage::load(storage, StorageKey::User)
    }

    pub(crate) fn save(&self, storage: &dyn Storage, user: &User) -> Result<(), StorageError> {
        storage::save(storage, StorageKey::User, user)
    }

    pub(crate) fn clear(&self, storage: &dyn Storage) -> Result<(), StorageError> {
        storage.remove(StorageKey::User)
    }
}
