//! Orders.

pub mod errors;
pub mod models;
mod repository;
pub mod service;
pub mod status;

pub(crate) use repository::OrdersRepository;

pub use errors::OrderError;
pub use service::*;
pub use status::OrderStatus;
