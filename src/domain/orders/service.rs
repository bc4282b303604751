//! Orders service.

use std::sync::Arc;

use mockall::automock;

use crate::{
    domain::orders::{
        errors::OrderError,
        models::{Order, OrderId},
        repository::OrdersRepository,
        status::OrderStatus,
    },
    storage::Storage,
};

/// The order store: append-only except for status edits and admin deletes.
#[automock]
pub trait OrdersService: Send + Sync {
    /// Every order, in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    fn list(&self) -> Result<Vec<Order>, OrderError>;

    /// Append a freshly created order.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be written.
    fn append(&self, order: Order) -> Result<(), OrderError>;

    /// Replace the status of the order with the given id, leaving every
    /// other field and every other order untouched.
    ///
    /// Transitions are unconstrained; moving a delivered or cancelled order
    /// back to an active status is applied but logged as non-routine.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] for an unknown id.
    fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<Order, OrderError>;

    /// Delete the order with the given id. Immediate; no confirmation or
    /// undo.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] for an unknown id.
    fn remove(&self, id: &OrderId) -> Result<(), OrderError>;

    /// The account view projection: orders whose customer phone equals
    /// `phone` exactly (case- and format-sensitive).
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    fn by_customer_phone(&self, phone: &str) -> Result<Vec<Order>, OrderError>;
}

/// [`OrdersService`] over the local key-value store.
#[derive(Clone)]
pub struct StoredOrdersService {
    storage: Arc<dyn Storage>,
    repository: OrdersRepository,
}

impl StoredOrdersService {
    /// Build the service over `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            repository: OrdersRepository::new(),
        }
    }
}

impl OrdersService for StoredOrdersService {
    fn list(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.repository.load(self.storage.as_ref())?)
    }

    fn append(&self, order: Order) -> Result<(), OrderError> {
        let mut orders = self.repository.load(self.storage.as_ref())?;

        orders.push(order);
        self.repository.save(self.storage.as_ref(), &orders)?;

        Ok(())
    }

    fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        let mut orders = self.repository.load(self.storage.as_ref())?;

        let order = orders
            .iter_mut()
            .find(|order| order.id == *id)
            .ok_or(OrderError::NotFound)?;

        if !order.status.is_routine_transition(status) {
            tracing::warn!(
                %id,
                from = order.status.label(),
                to = status.label(),
                "non-routine status transition"
            );
        }

        order.status = status;
        let updated = order.clone();

        self.repository.save(self.storage.as_ref(), &orders)?;

        tracing::info!(%id, status = updated.status.label(), "order status updated");

        Ok(updated)
    }

    fn remove(&self, id: &OrderId) -> Result<(), OrderError> {
        let mut orders = self.repository.load(self.storage.as_ref())?;
        let before = orders.len();

        orders.retain(|order| order.id != *id);

        if orders.len() == before {
            return Err(OrderError::NotFound);
        }

        self.repository.save(self.storage.as_ref(), &orders)?;

        tracing::info!(%id, "order removed");

        Ok(())
    }

    fn by_customer_phone(&self, phone: &str) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.repository.load(self.storage.as_ref())?;

        orders.retain(|order| order.customer.phone == phone);

        Ok(orders)
    }
}
