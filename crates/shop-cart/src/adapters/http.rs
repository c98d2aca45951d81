//! # HTTP Stock Service
//!
//! [`StockService`] over the storefront's REST API using `reqwest`.
//!
//! | Call | Request |
//! |------|---------|
//! | `product(id)` | `GET {base_url}/products/{id}` |
//! | `stock(id)` | `GET {base_url}/stock/{id}` |
//!
//! No retries. The only timeout is the optional one configured on the underlying client.

use crate::model::{Product, ProductId, Stock};
use crate::ports::{ServiceError, StockService};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct HttpStockService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStockService {
    /// Builds a service for `base_url` (e.g. `http://localhost:3333`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ServiceError> {
        Self::with_timeout(base_url, None)
    }

    /// Same as [`HttpStockService::new`], with a per-request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ServiceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        id: ProductId,
    ) -> Result<T, ServiceError> {
        let url = format!("{}/{}/{}", self.base_url, path, id);
        debug!(%url, "GET");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        match resp.status() {
            StatusCode::NOT_FOUND => Err(ServiceError::NotFound(id)),
            status if !status.is_success() => Err(ServiceError::Status {
                status: status.as_u16(),
                url,
            }),
            _ => resp
                .json::<T>()
                .await
                .map_err(|e| ServiceError::Decode(e.to_string())),
        }
    }
}

#[async_trait]
impl StockService for HttpStockService {
    #[instrument(skip(self))]
    async fn product(&self, id: ProductId) -> Result<Product, ServiceError> {
        self.get_json("products", id).await
    }

    #[instrument(skip(self))]
    async fn stock(&self, id: ProductId) -> Result<Stock, ServiceError> {
        self.get_json("stock", id).await
    }
}
