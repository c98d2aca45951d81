//! In-memory [`StockService`]. Used by the integration tests and handy for demos without
//! a running API.

use crate::model::{Product, ProductId, Stock};
use crate::ports::{ServiceError, StockService};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct StaticCatalog {
    entries: RwLock<HashMap<ProductId, (Product, u32)>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a product with `stock` units available.
    pub fn with_product(self, product: Product, stock: u32) -> Self {
        self.insert(product, stock);
        self
    }

    pub fn insert(&self, product: Product, stock: u32) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(product.id, (product, stock));
    }

    /// Changes the available stock of an existing product. Returns false if unknown.
    pub fn set_stock(&self, id: ProductId, stock: u32) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        match entries.get_mut(&id) {
            Some(entry) => {
                entry.1 = stock;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl StockService for StaticCatalog {
    async fn product(&self, id: ProductId) -> Result<Product, ServiceError> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries
            .get(&id)
            .map(|(product, _)| product.clone())
            .ok_or(ServiceError::NotFound(id))
    }

    async fn stock(&self, id: ProductId) -> Result<Stock, ServiceError> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries
            .get(&id)
            .map(|(_, amount)| Stock::new(id, *amount))
            .ok_or(ServiceError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_and_restock() {
        let catalog = StaticCatalog::new()
            .with_product(Product::new(ProductId(1), "Runner", 120.0, "r.png"), 3);

        assert_eq!(catalog.stock(ProductId(1)).await.unwrap().amount, 3);
        assert!(catalog.set_stock(ProductId(1), 0));
        assert_eq!(catalog.stock(ProductId(1)).await.unwrap().amount, 0);
        assert_eq!(catalog.product(ProductId(1)).await.unwrap().title, "Runner");

        assert!(!catalog.set_stock(ProductId(9), 1));
        assert_eq!(
            catalog.product(ProductId(9)).await,
            Err(ServiceError::NotFound(ProductId(9)))
        );
    }
}
