//! Session models.

use serde::{Deserialize, Serialize};

/// The single remembered identity of whichever customer last logged in.
///
/// There is no password, token or expiry: this is a convenience for
/// pre-filling forms and joining the account view to orders by phone, not an
/// authentication mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Contact phone; the order-history join key.
    pub phone: String,
    /// Contact name.
    pub name: String,
    /// Contact email.
    pub email: String,
}
