//! Engine catalog.

pub mod data;
pub mod errors;
pub mod filter;
pub mod models;
mod repository;
pub mod service;

pub(crate) use repository::EnginesRepository;

pub use errors::CatalogError;
pub use service::*;
