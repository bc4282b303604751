//! Order models.

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::domain::{
    checkout::models::PaymentMethod, engines::models::Engine, orders::status::OrderStatus,
};

/// Order identifier: the decimal millisecond value of the creation
/// timestamp, as a string. Same-millisecond collisions are possible and
/// accepted, as they always were.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    /// Derive an id from the creation timestamp.
    #[must_use]
    pub fn from_timestamp(timestamp: Timestamp) -> Self {
        Self(timestamp.as_millisecond().to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// Who placed the order. `phone` doubles as the join key for the account
/// view's order history — an exact string match, so differently formatted
/// phone numbers do not join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Contact name.
    pub name: String,
    /// Contact phone, exactly as entered.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Whether the buyer is a legal entity.
    pub is_company: bool,
    /// Tax id, present for company orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,
    /// Company name, present for company orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

/// How the order ships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    /// Display label of the chosen method (e.g. «Курьерская доставка»).
    pub method: String,
    /// Delivery address; absent for pickup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Fixed cost of the method, in whole roubles.
    pub cost: u64,
}

/// A completed checkout.
///
/// Holds snapshots of the purchased items, not references into the catalog:
/// later catalog edits and deletes never touch an existing order. Everything
/// except `status` is immutable after creation; `total` is computed once and
/// never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Time-derived identifier.
    pub id: OrderId,
    /// Creation timestamp.
    pub date: Timestamp,
    /// Who placed the order.
    pub customer: Customer,
    /// How the order ships.
    pub delivery: Delivery,
    /// Chosen payment method token.
    pub payment: PaymentMethod,
    /// Snapshots of the purchased engines, in cart order.
    pub items: Vec<Engine>,
    /// Item subtotal plus delivery cost, in whole roubles.
    pub total: u64,
    /// Mutable lifecycle status.
    pub status: OrderStatus,
    /// Optional free-text note from the shopper.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
