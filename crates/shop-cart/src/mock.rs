//! # Test Doubles for the Cart's Collaborators
//!
//! Used to run a real cart actor against scripted dependencies.
//!
//! - [`MockStockService`]: queued expectations per endpoint, answered in order.
//! - [`RecordingNotifier`]: keeps every notification for later assertions.
//! - [`FlakyStore`]: an in-memory store whose writes can be switched to fail.
//!
//! ```rust
//! use shop_cart::mock::MockStockService;
//! use shop_cart::model::{Product, ProductId};
//! use shop_cart::ports::{ServiceError, StockService};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockStockService::new();
//!     mock.expect_stock(ProductId(1)).return_ok(4);
//!     mock.expect_product(ProductId(2)).return_err(ServiceError::NotFound(ProductId(2)));
//!
//!     assert_eq!(mock.stock(ProductId(1)).await.unwrap().amount, 4);
//!     assert!(mock.product(ProductId(2)).await.is_err());
//!     mock.verify();
//! }
//! ```

use crate::adapters::MemoryStore;
use crate::model::{Product, ProductId, Stock};
use crate::ports::{KeyValueStore, Notification, Notifier, ServiceError, StockService, StorageError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

type Queue<T> = Mutex<VecDeque<(ProductId, Result<T, ServiceError>)>>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

// =============================================================================
// STOCK SERVICE
// =============================================================================

/// A [`StockService`] that answers from queued expectations.
///
/// A call with no matching expectation (wrong endpoint or wrong id) answers with
/// [`ServiceError::Transport`] and makes [`MockStockService::verify`] panic.
#[derive(Default)]
pub struct MockStockService {
    products: Queue<Product>,
    stocks: Queue<Stock>,
    unexpected: Mutex<Vec<String>>,
    calls: Mutex<Vec<String>>,
}

impl MockStockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects `product(id)`.
    pub fn expect_product(&self, id: ProductId) -> ExpectationBuilder<'_, Product> {
        ExpectationBuilder {
            id,
            queue: &self.products,
        }
    }

    /// Expects `stock(id)`.
    pub fn expect_stock(&self, id: ProductId) -> StockExpectation<'_> {
        StockExpectation {
            inner: ExpectationBuilder {
                id,
                queue: &self.stocks,
            },
        }
    }

    /// Calls received so far, e.g. `["product(1)", "stock(1)"]`.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    /// Verifies that all expectations were met and nothing unexpected was called.
    pub fn verify(&self) {
        let unexpected = lock(&self.unexpected).clone();
        if !unexpected.is_empty() {
            panic!("Unexpected calls: {:?}", unexpected);
        }
        let remaining = lock(&self.products).len() + lock(&self.stocks).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn answer<T>(&self, endpoint: &str, id: ProductId, queue: &Queue<T>) -> Result<T, ServiceError> {
        let call = format!("{endpoint}({id})");
        lock(&self.calls).push(call.clone());

        let mut queue = lock(queue);
        if queue.front().is_some_and(|(expected, _)| *expected == id) {
            if let Some((_, response)) = queue.pop_front() {
                return response;
            }
        }
        drop(queue);

        lock(&self.unexpected).push(call.clone());
        Err(ServiceError::Transport(format!("unexpected call {call}")))
    }
}

#[async_trait]
impl StockService for MockStockService {
    async fn product(&self, id: ProductId) -> Result<Product, ServiceError> {
        self.answer("product", id, &self.products)
    }

    async fn stock(&self, id: ProductId) -> Result<Stock, ServiceError> {
        self.answer("stock", id, &self.stocks)
    }
}

/// Builder for a queued expectation.
pub struct ExpectationBuilder<'a, T> {
    id: ProductId,
    queue: &'a Queue<T>,
}

impl<T> ExpectationBuilder<'_, T> {
    /// Sets the expectation to answer with `value`.
    pub fn return_ok(self, value: T) {
        lock(self.queue).push_back((self.id, Ok(value)));
    }

    /// Sets the expectation to answer with an error.
    pub fn return_err(self, error: ServiceError) {
        lock(self.queue).push_back((self.id, Err(error)));
    }
}

/// [`ExpectationBuilder`] for stock records, taking the available amount.
pub struct StockExpectation<'a> {
    inner: ExpectationBuilder<'a, Stock>,
}

impl StockExpectation<'_> {
    pub fn return_ok(self, amount: u32) {
        let id = self.inner.id;
        self.inner.return_ok(Stock::new(id, amount));
    }

    pub fn return_err(self, error: ServiceError) {
        self.inner.return_err(error);
    }
}

// =============================================================================
// NOTIFIER
// =============================================================================

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        lock(&self.seen).clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        lock(&self.seen).push(notification);
    }
}

// =============================================================================
// STORE
// =============================================================================

/// [`MemoryStore`] with a switch that makes every `set` fail.
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    failing: AtomicBool,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Io("quota exceeded".to_string()));
        }
        self.inner.set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_wrong_id_is_unexpected() {
        let mock = MockStockService::new();
        mock.expect_stock(ProductId(1)).return_ok(2);

        assert!(matches!(
            mock.stock(ProductId(2)).await,
            Err(ServiceError::Transport(_))
        ));
        assert_eq!(mock.stock(ProductId(1)).await.unwrap().amount, 2);
        assert_eq!(mock.calls(), vec!["stock(2)", "stock(1)"]);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(result.is_err());
    }

    #[test]
    fn test_flaky_store_switch() {
        let store = FlakyStore::new();
        store.set("k", "1").unwrap();
        store.set_failing(true);
        assert!(store.set("k", "2").is_err());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("1"));
    }
}
