//! # Product/Stock Service Port
//!
//! The read-only service the cart consults before every change that needs a stock check.

use crate::model::{Product, ProductId, Stock};
use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by a [`StockService`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// The service has no record for this product.
    #[error("Product {0} not found")]
    NotFound(ProductId),

    /// The service answered with a non-success status.
    #[error("Service returned {status} for {url}")]
    Status { status: u16, url: String },

    /// The request never produced a response (connection refused, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Source of product and stock records.
///
/// Implemented by [`HttpStockService`](crate::adapters::HttpStockService) against the
/// storefront API and by [`StaticCatalog`](crate::adapters::StaticCatalog) in memory.
#[async_trait]
pub trait StockService: Send + Sync {
    /// `GET /products/{id}`
    async fn product(&self, id: ProductId) -> Result<Product, ServiceError>;

    /// `GET /stock/{id}`
    async fn stock(&self, id: ProductId) -> Result<Stock, ServiceError>;
}
