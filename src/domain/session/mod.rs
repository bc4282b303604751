//! Customer session.

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub(crate) use repository::SessionRepository;

pub use errors::SessionError;
pub use service::*;
