//! Checkout errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors from the checkout flow.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// There is nothing to order; checkout is blocked entirely.
    #[error("cart is empty")]
    EmptyCart,

    /// Name, phone or email was left blank.
    #[error("contact details are required")]
    MissingContact,

    /// The chosen delivery method ships to an address and none was given.
    #[error("delivery address is required")]
    MissingAddress,

    /// Buying as a legal entity without company name or tax id.
    #[error("company name and tax id are required for company orders")]
    MissingCompanyDetails,

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[from] StorageError),
}
