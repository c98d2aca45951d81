//! The three collaborators the cart depends on: a stock service, a key-value store and a
//! notifier. Concrete implementations live in [`crate::adapters`].

pub mod notify;
pub mod stock_service;
pub mod storage;

pub use notify::*;
pub use stock_service::*;
pub use storage::*;
