use crate::adapters::{HttpStockService, JsonFileStore, TracingNotifier};
use crate::cart_actor::{self, CartContext};
use crate::clients::CartClient;
use crate::config::{CartConfig, ConfigError};
use crate::model::Cart;
use crate::ports::CartStorage;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Runtime orchestrator for the cart actor.
///
/// # Example
///
/// ```ignore
/// let system = CartSystem::start(context, 32);
/// system.cart_client.add_product(ProductId(1)).await?;
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Client for interacting with the cart actor
    pub cart_client: CartClient,

    handle: tokio::task::JoinHandle<()>,
}

impl CartSystem {
    /// Loads the persisted cart and spawns the actor. Must be called inside a Tokio runtime.
    pub fn start(context: CartContext, buffer_size: usize) -> Self {
        let initial = load_initial(&context.storage);
        info!(items = initial.len(), "Starting cart system");

        let (actor, cart_client) = cart_actor::new(initial, buffer_size);
        let handle = tokio::spawn(actor.run(context));

        Self {
            cart_client,
            handle,
        }
    }

    /// Wires the production adapters: HTTP stock service, JSON file store and the
    /// tracing notifier.
    pub fn from_config(config: &CartConfig) -> Result<Self, ConfigError> {
        let stock_service =
            HttpStockService::with_timeout(config.api_url.clone(), config.request_timeout)
                .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        let store = JsonFileStore::new(config.storage_path.clone());
        let storage = CartStorage::new(Arc::new(store), config.storage_key.clone());

        let context = CartContext::new(Arc::new(stock_service), storage, Arc::new(TracingNotifier));
        Ok(Self::start(context, config.buffer_size))
    }

    /// Gracefully shuts down the cart actor.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart system...");

        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Cart actor failed");
            return Err(format!("Cart actor failed: {e}"));
        }

        info!("Cart system shut down");
        Ok(())
    }
}

fn load_initial(storage: &CartStorage) -> Cart {
    match storage.load() {
        Ok(Some(cart)) => cart,
        Ok(None) => Cart::new(),
        Err(e) => {
            warn!(key = storage.key(), error = %e, "Discarding unreadable cart snapshot");
            Cart::new()
        }
    }
}
