//! Orders service errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors from order store operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// No order with the given id.
    #[error("order not found")]
    NotFound,

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[from] StorageError),
}
