//! Concrete implementations of the [`crate::ports`] traits.

pub mod catalog;
pub mod file_store;
pub mod http;
pub mod memory_store;
pub mod notifiers;

pub use catalog::StaticCatalog;
pub use file_store::JsonFileStore;
pub use http::HttpStockService;
pub use memory_store::MemoryStore;
pub use notifiers::{ChannelNotifier, TracingNotifier};
