//! Orders repository.

use crate::{
    domain::orders::models::Order,
    storage::{self, Storage, StorageError, StorageKey},
};

/// Raw persistence for the order list under `orders`. An absent key reads as
/// no orders.
#[derive(Debug, Clone, Default)]
pub(crate) struct OrdersRepository;

impl OrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn load(&self, storage: &dyn Storage) -> Result<Vec<Order>, StorageError> {
        Ok(storage::load(storage, StorageKey::Orders)?.unwrap_or_default())
    }

    pub(crate) fn save(&self, storage: &dyn Storage, orders: &[Order]) -> Result<(), StorageError> {
        storage::save(storage, StorageKey::Orders, orders)
    }
}
