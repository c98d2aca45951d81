//! # Durable Key-Value Store Port
//!
//! A synchronous string-to-string store, in the spirit of browser local storage, and
//! [`CartStorage`], which keeps the cart snapshot under a single key.
//!
//! ## Failure contract
//!
//! [`CartStorage::save`] either writes the whole snapshot or returns an error. The cart
//! actor calls it before swapping in a new snapshot, so a failed save means the in-memory
//! cart keeps its previous value.

use crate::model::Cart;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by a [`KeyValueStore`] or by snapshot encoding.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Corrupt snapshot: {0}")]
    Corrupt(String),

    #[error("Could not encode snapshot: {0}")]
    Encode(String),
}

/// Synchronous local persistence.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Reads and writes the JSON cart snapshot under one key.
#[derive(Clone)]
pub struct CartStorage {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl CartStorage {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the stored snapshot. `Ok(None)` if nothing was ever saved.
    pub fn load(&self) -> Result<Option<Cart>, StorageError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    /// Replaces the stored snapshot with `cart`.
    pub fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let raw = serde_json::to_string(cart).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.store.set(&self.key, &raw)
    }
}

impl fmt::Debug for CartStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStorage").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use crate::model::{Product, ProductId};

    #[test]
    fn test_load_missing_key() {
        let storage = CartStorage::new(Arc::new(MemoryStore::new()), "cart");
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let store = Arc::new(MemoryStore::new());
        let storage = CartStorage::new(store.clone(), "cart");
        let cart = Cart::from_items(vec![
            Product::new(ProductId(2), "Boot", 99.5, "boot.png").with_amount(2)
        ]);

        storage.save(&cart).unwrap();

        assert_eq!(storage.load().unwrap(), Some(cart));
        assert!(store.get("cart").unwrap().unwrap().starts_with('['));
    }

    #[test]
    fn test_corrupt_snapshot() {
        let store = Arc::new(MemoryStore::new());
        store.set("cart", "{not json").unwrap();
        let storage = CartStorage::new(store, "cart");

        assert!(matches!(storage.load(), Err(StorageError::Corrupt(_))));
    }
}
