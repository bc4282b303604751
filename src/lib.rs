//! promdvigatel
//!
//! Storefront and admin services for the «ПромДвигатель» industrial engine
//! shop: a filterable engine catalog, a shopping cart, a checkout flow that
//! produces orders, a remembered customer session and the admin CRUD surface
//! over catalog and orders.
//!
//! All state persists as JSON under four fixed keys (`cart`, `orders`,
//! `engines`, `user`) in a local key-value store behind the [`storage`]
//! boundary. Every operation is synchronous; there is no server and no
//! background work.

pub mod context;
pub mod domain;
pub mod storage;

#[cfg(test)]
mod test;
