//! # Cart Client
//!
//! Provides a high-level API for interacting with the cart actor.
//! It wraps a `SnapshotClient<Cart>` and exposes the three cart operations.
use crate::cart_actor::{CartCommand, CartError, UpdateProductAmount};
use crate::model::{Cart, ProductId};
use async_trait::async_trait;
use snapshot_actor::{FrameworkError, SnapshotClient, SnapshotHandle};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for interacting with the cart actor. Cheap to clone.
#[derive(Clone)]
pub struct CartClient {
    inner: SnapshotClient<Cart>,
}

impl CartClient {
    pub fn new(inner: SnapshotClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SnapshotHandle<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &SnapshotClient<Cart> {
        &self.inner
    }

    // Entity errors come back as the `CartError` the entity raised; anything else means the
    // actor itself is unreachable.
    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<CartError>()
            .unwrap_or_else(|e| CartError::ActorCommunicationError(e.to_string()))
    }
}

impl CartClient {
    /// Adds one unit of `id`, inserting the product if it is not in the cart yet.
    ///
    /// Returns the cart after the change.
    #[instrument(skip(self))]
    pub async fn add_product(&self, id: ProductId) -> Result<Arc<Cart>, CartError> {
        debug!("Sending request");
        self.send(CartCommand::AddProduct(id)).await
    }

    /// Removes the line item for `id`. Fails with [`CartError::NotInCart`] if absent.
    #[instrument(skip(self))]
    pub async fn remove_product(&self, id: ProductId) -> Result<Arc<Cart>, CartError> {
        debug!("Sending request");
        self.send(CartCommand::RemoveProduct(id)).await
    }

    /// Sets the amount of `id`.
    ///
    /// An amount of 0, or a product that is not in the cart, leaves the cart unchanged
    /// and is not an error. An amount above the available stock is.
    #[instrument(skip(self))]
    pub async fn update_product_amount(
        &self,
        id: ProductId,
        amount: u32,
    ) -> Result<Arc<Cart>, CartError> {
        debug!("Sending request");
        self.send(CartCommand::UpdateProductAmount(UpdateProductAmount::new(
            id, amount,
        )))
        .await
    }

    /// The current cart snapshot.
    pub async fn cart(&self) -> Result<Arc<Cart>, CartError> {
        self.current().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use snapshot_actor::mock::{create_mock_client, expect_apply, expect_get, MockClient};

    fn cart_with(id: u32, amount: u32) -> Cart {
        Cart::from_items(vec![
            Product::new(ProductId(id), "Sneaker", 100.0, "s.png").with_amount(amount)
        ])
    }

    #[tokio::test]
    async fn test_add_product_sends_add_command() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let add_task = tokio::spawn(async move { cart_client.add_product(ProductId(3)).await });

        let (command, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        assert_eq!(command, CartCommand::AddProduct(ProductId(3)));
        responder.send(Ok(Arc::new(cart_with(3, 1)))).unwrap();

        let cart = add_task.await.unwrap().unwrap();
        assert_eq!(cart.get(ProductId(3)).unwrap().amount, 1);
    }

    #[tokio::test]
    async fn test_update_sends_payload() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let update_task = tokio::spawn(async move {
            cart_client.update_product_amount(ProductId(1), 3).await
        });

        let (command, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        match command {
            CartCommand::UpdateProductAmount(update) => {
                assert_eq!(update.product_id, ProductId(1));
                assert_eq!(update.amount, 3);
            }
            other => panic!("Expected UpdateProductAmount, got {other:?}"),
        }
        responder.send(Ok(Arc::new(cart_with(1, 3)))).unwrap();

        assert!(update_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_entity_error_is_recovered() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let remove_task =
            tokio::spawn(async move { cart_client.remove_product(ProductId(8)).await });

        let (_, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                CartError::NotInCart(ProductId(8)),
            ))))
            .unwrap();

        assert_eq!(
            remove_task.await.unwrap(),
            Err(CartError::NotInCart(ProductId(8)))
        );
    }

    #[tokio::test]
    async fn test_foreign_entity_error_becomes_communication_error() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let cart_task = tokio::spawn(async move { cart_client.cart().await });

        let responder = expect_get(&mut receiver).await.expect("Expected Get request");
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                std::io::Error::other("unexpected"),
            ))))
            .unwrap();

        match cart_task.await.unwrap() {
            Err(CartError::ActorCommunicationError(msg)) => assert!(msg.contains("unexpected")),
            other => panic!("Expected ActorCommunicationError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_with_mock_client_expectations() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_snapshot().return_ok(Cart::new());
        mock.expect_apply().return_err(FrameworkError::ActorClosed);

        let cart_client = CartClient::new(mock.client());
        assert!(cart_client.cart().await.unwrap().is_empty());
        assert!(matches!(
            cart_client.add_product(ProductId(1)).await,
            Err(CartError::ActorCommunicationError(_))
        ));

        assert_eq!(mock.take_commands(), vec![CartCommand::AddProduct(ProductId(1))]);
        mock.verify();
    }
}
