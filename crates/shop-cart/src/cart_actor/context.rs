use crate::ports::{CartStorage, Notifier, StockService};
use std::sync::Arc;

/// Collaborators injected into the cart actor through `run(context)`.
#[derive(Clone)]
pub struct CartContext {
    pub stock_service: Arc<dyn StockService>,
    pub storage: CartStorage,
    pub notifier: Arc<dyn Notifier>,
}

impl CartContext {
    pub fn new(
        stock_service: Arc<dyn StockService>,
        storage: CartStorage,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            stock_service,
            storage,
            notifier,
        }
    }
}
