//! Catalog service errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors from catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No engine with the given id in the active catalog.
    #[error("engine not found")]
    NotFound,

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[from] StorageError),
}
