//! Shop domain concerns.

pub mod cart;
pub mod checkout;
pub mod engines;
pub mod orders;
pub mod session;
