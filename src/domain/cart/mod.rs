//! Shopping cart.

pub mod errors;
mod repository;
pub mod service;

pub(crate) use repository::CartRepository;

pub use errors::CartError;
pub use service::*;
