//! Cart service.

use std::sync::Arc;

use mockall::automock;

use crate::{
    domain::{
        cart::{errors::CartError, repository::CartRepository},
        engines::models::{Engine, EngineId},
    },
    storage::Storage,
};

/// The shopper's in-progress selection. An ordered sequence of engine
/// snapshots; the same engine id may appear more than once (there is no
/// quantity field). Every mutation persists the full sequence.
#[automock]
pub trait CartService: Send + Sync {
    /// The cart contents, in the order they were added.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    fn items(&self) -> Result<Vec<Engine>, CartError>;

    /// Append an engine snapshot. No dedup or merge.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be written.
    fn add(&self, engine: Engine) -> Result<(), CartError>;

    /// Remove every entry whose id matches.
    ///
    /// When the same engine was added twice, one removal drops both copies.
    /// That is how the shop has always behaved, so it is kept and pinned by
    /// a test rather than silently changed. Removing an id not in the cart
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be written.
    fn remove(&self, id: EngineId) -> Result<(), CartError>;

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be written.
    fn clear(&self) -> Result<(), CartError>;

    /// Number of entries (not distinct engines).
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    fn len(&self) -> Result<usize, CartError>;

    /// Whether the cart holds no entries.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    fn is_empty(&self) -> Result<bool, CartError>;

    /// Sum of entry prices, in whole roubles.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    fn subtotal(&self) -> Result<u64, CartError>;
}

/// [`CartService`] over the local key-value store.
#[derive(Clone)]
pub struct StoredCartService {
    storage: Arc<dyn Storage>,
    repository: CartRepository,
}

impl StoredCartService {
    /// Build the service over `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            repository: CartRepository::new(),
        }
    }
}

impl CartService for StoredCartService {
    fn items(&self) -> Result<Vec<Engine>, CartError> {
        Ok(self.repository.load(self.storage.as_ref())?)
    }

    fn add(&self, engine: Engine) -> Result<(), CartError> {
        let mut items = self.repository.load(self.storage.as_ref())?;

        tracing::debug!(id = %engine.id, name = %engine.name, "engine added to cart");

        items.push(engine);
        self.repository.save(self.storage.as_ref(), &items)?;

        Ok(())
    }

    fn remove(&self, id: EngineId) -> Result<(), CartError> {
        let mut items = self.repository.load(self.storage.as_ref())?;

        items.retain(|item| item.id != id);
        self.repository.save(self.storage.as_ref(), &items)?;

        Ok(())
    }

    fn clear(&self) -> Result<(), CartError> {
        self.repository.save(self.storage.as_ref(), &[])?;

        Ok(())
    }

    fn len(&self) -> Result<usize, CartError> {
        Ok(self.items()?.len())
    }

    fn is_empty(&self) -> Result<bool, CartError> {
        Ok(self.items()?.is_empty())
    }

    fn subtotal(&self) -> Result<u64, CartError> {
        Ok(self.items()?.iter().map(|item| item.price).sum())
    }
}
