//! Store context.
//!
//! One explicit object carrying every service handle, passed to whatever
//! composes views, instead of ambient singletons.

use std::{path::Path, sync::Arc};

use crate::{
    domain::{
        cart::{CartService, StoredCartService},
        checkout::{CheckoutService, StoredCheckoutService},
        engines::{CatalogService, StoredCatalogService},
        orders::{OrdersService, StoredOrdersService},
        session::{SessionService, StoredSessionService},
    },
    storage::{FileStorage, MemoryStorage, Storage, StorageError},
};

/// Service handles over one shared store.
///
/// The storefront uses `catalog`, `cart`, `checkout` and `session`; the
/// admin panel is CRUD over `catalog` and `orders`; the account page is
/// `session` plus the phone projection on `orders`.
#[derive(Clone)]
pub struct StoreContext {
    /// Catalog reads, filtering and admin CRUD.
    pub catalog: Arc<dyn CatalogService>,
    /// The shopper's cart.
    pub cart: Arc<dyn CartService>,
    /// The checkout flow.
    pub checkout: Arc<dyn CheckoutService>,
    /// The order store.
    pub orders: Arc<dyn OrdersService>,
    /// The remembered customer identity.
    pub session: Arc<dyn SessionService>,
}

impl StoreContext {
    /// Wire every service over the given storage backend.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            catalog: Arc::new(StoredCatalogService::new(storage.clone())),
            cart: Arc::new(StoredCartService::new(storage.clone())),
            checkout: Arc::new(StoredCheckoutService::new(storage.clone())),
            orders: Arc::new(StoredOrdersService::new(storage.clone())),
            session: Arc::new(StoredSessionService::new(storage)),
        }
    }

    /// A context over process-local memory; nothing survives the process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// A context persisting into `<dir>/<key>.json` files.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let storage = FileStorage::open(dir.as_ref())?;

        Ok(Self::new(Arc::new(storage)))
    }
}
