//! # Cart Entity
//!
//! Every command computes a new [`Cart`] from the current one. The actor persists it
//! through [`SnapshotEntity::on_commit`] and only then swaps it in.
//!
//! | Command | Reads | Rejections |
//! |---------|-------|------------|
//! | `AddProduct` | product + stock, concurrently | `AddFailed`, `OutOfStock` |
//! | `RemoveProduct` | none | `NotInCart` |
//! | `UpdateProductAmount` | stock | `UpdateFailed`, `OutOfStock` |
//!
//! An update to amount 0, or for a product not in the cart, is a silent no-op.

use crate::cart_actor::{CartCommand, CartContext, CartError, UpdateProductAmount};
use crate::model::{Cart, Product, ProductId};
use crate::ports::StorageError;
use async_trait::async_trait;
use snapshot_actor::SnapshotEntity;
use tracing::debug;

#[async_trait]
impl SnapshotEntity for Cart {
    type Command = CartCommand;
    type Context = CartContext;
    type Error = CartError;

    async fn apply(
        &self,
        command: CartCommand,
        ctx: &CartContext,
    ) -> Result<Option<Self>, CartError> {
        match command {
            CartCommand::AddProduct(id) => self.add_product(id, ctx).await.map(Some),
            CartCommand::RemoveProduct(id) => self.remove_product(id).map(Some),
            CartCommand::UpdateProductAmount(update) => self.update_amount(update, ctx).await,
        }
    }

    async fn on_commit(&self, ctx: &CartContext) -> Result<(), CartError> {
        let storage = ctx.storage.clone();
        let snapshot = self.clone();
        tokio::task::spawn_blocking(move || storage.save(&snapshot))
            .await
            .map_err(|e| StorageError::Io(e.to_string()))??;
        debug!(items = self.len(), key = ctx.storage.key(), "Cart persisted");
        Ok(())
    }

    fn on_reject(&self, error: &CartError, ctx: &CartContext) {
        if let Some(notification) = error.notification() {
            ctx.notifier.notify(notification);
        }
    }
}

impl Cart {
    async fn add_product(&self, id: ProductId, ctx: &CartContext) -> Result<Cart, CartError> {
        let (product, stock) = tokio::try_join!(
            ctx.stock_service.product(id),
            ctx.stock_service.stock(id)
        )
        .map_err(|source| CartError::AddFailed { id, source })?;

        let requested = self.get(id).map_or(1, |line| line.amount.saturating_add(1));
        if !stock.allows(requested) {
            return Err(CartError::OutOfStock {
                id,
                requested,
                available: stock.amount,
            });
        }

        if self.contains(id) {
            Ok(self.with_amount(id, requested))
        } else {
            // The line is keyed by the requested id whatever the service echoes back.
            let line = Product { id, ..product }.with_amount(1);
            Ok(self.with_line(line))
        }
    }

    fn remove_product(&self, id: ProductId) -> Result<Cart, CartError> {
        if !self.contains(id) {
            return Err(CartError::NotInCart(id));
        }
        Ok(self.without(id))
    }

    async fn update_amount(
        &self,
        update: UpdateProductAmount,
        ctx: &CartContext,
    ) -> Result<Option<Cart>, CartError> {
        let UpdateProductAmount { product_id: id, amount } = update;

        let stock = ctx
            .stock_service
            .stock(id)
            .await
            .map_err(|source| CartError::UpdateFailed { id, source })?;

        if !stock.allows(amount) {
            return Err(CartError::OutOfStock {
                id,
                requested: amount,
                available: stock.amount,
            });
        }

        if amount == 0 || !self.contains(id) {
            debug!(%id, amount, "Update ignored");
            return Ok(None);
        }

        Ok(Some(self.with_amount(id, amount)))
    }
}
