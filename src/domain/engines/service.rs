//! Catalog service.

use std::sync::Arc;

use jiff::Timestamp;
use mockall::automock;

use crate::{
    domain::engines::{
        errors::CatalogError,
        filter::CatalogFilter,
        models::{Engine, EngineDraft, EngineId},
        repository::EnginesRepository,
    },
    storage::Storage,
};

/// Catalog operations: the storefront read side plus the admin CRUD surface.
#[automock]
pub trait CatalogService: Send + Sync {
    /// Every engine in the active catalog, in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    fn list(&self) -> Result<Vec<Engine>, CatalogError>;

    /// A single engine by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id.
    fn get(&self, id: EngineId) -> Result<Engine, CatalogError>;

    /// The engines passing every enabled filter predicate, in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    fn filtered(&self, filter: &CatalogFilter) -> Result<Vec<Engine>, CatalogError>;

    /// Distinct manufacturers, in first-seen catalog order (the storefront's
    /// filter dropdown).
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    fn manufacturers(&self) -> Result<Vec<String>, CatalogError>;

    /// Create an engine from an admin form draft, assigning a time-derived
    /// id and the stock image when none was given.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be written.
    fn create(&self, draft: EngineDraft) -> Result<Engine, CatalogError>;

    /// Insert `engine`, or replace the catalog entry with the same id.
    ///
    /// The first admin mutation materializes the built-in seed into the
    /// store before applying, so the persisted catalog starts from what the
    /// storefront was already showing.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be written.
    fn upsert(&self, engine: Engine) -> Result<(), CatalogError>;

    /// Delete the engine with the given id. Immediate; no confirmation or
    /// undo. Orders keep their item snapshots untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id.
    fn remove(&self, id: EngineId) -> Result<(), CatalogError>;
}

/// [`CatalogService`] over the local key-value store.
#[derive(Clone)]
pub struct StoredCatalogService {
    storage: Arc<dyn Storage>,
    repository: EnginesRepository,
}

impl StoredCatalogService {
    /// Build the service over `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            repository: EnginesRepository::new(),
        }
    }
}

impl CatalogService for StoredCatalogService {
    fn list(&self) -> Result<Vec<Engine>, CatalogError> {
        Ok(self.repository.active(self.storage.as_ref())?)
    }

    fn get(&self, id: EngineId) -> Result<Engine, CatalogError> {
        self.list()?
            .into_iter()
            .find(|engine| engine.id == id)
            .ok_or(CatalogError::NotFound)
    }

    fn filtered(&self, filter: &CatalogFilter) -> Result<Vec<Engine>, CatalogError> {
        let mut engines = self.list()?;
        engines.retain(|engine| filter.matches(engine));

        Ok(engines)
    }

    fn manufacturers(&self) -> Result<Vec<String>, CatalogError> {
        let mut manufacturers: Vec<String> = Vec::new();

        for engine in self.list()? {
            if !manufacturers.contains(&engine.manufacturer) {
                manufacturers.push(engine.manufacturer);
            }
        }

        Ok(manufacturers)
    }

    fn create(&self, draft: EngineDraft) -> Result<Engine, CatalogError> {
        let engine = draft.into_engine(EngineId::from_timestamp(Timestamp::now()));

        self.upsert(engine.clone())?;

        tracing::info!(id = %engine.id, name = %engine.name, "engine created");

        Ok(engine)
    }

    fn upsert(&self, engine: Engine) -> Result<(), CatalogError> {
        let mut engines = self.repository.active(self.storage.as_ref())?;

        match engines.iter_mut().find(|existing| existing.id == engine.id) {
            Some(existing) => *existing = engine,
            None => engines.push(engine),
        }

        self.repository.save(self.storage.as_ref(), &engines)?;

        Ok(())
    }

    fn remove(&self, id: EngineId) -> Result<(), CatalogError> {
        let mut engines = self.repository.active(self.storage.as_ref())?;
        let before = engines.len();

        engines.retain(|engine| engine.id != id);

        if engines.len() == before {
            return Err(CatalogError::NotFound);
        }

        self.repository.save(self.storage.as_ref(), &engines)?;

        tracing::info!(%id, "engine removed");

        Ok(())
    }
}
