//! Cart service errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors from cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The backing store failed.
    #[error("storage error")]
    Storage(#[from] StorageError),
}
