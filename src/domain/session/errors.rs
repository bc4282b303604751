//! Session errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The backing store failed.
    #[error("storage error")]
    Storage(#[from] StorageError),
}
