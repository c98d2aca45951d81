use crate::model::ProductId;

/// Commands accepted by the cart actor.
#[derive(Debug, Clone, PartialEq)]
pub enum CartCommand {
    /// Add one unit of a product, or insert it with amount 1.
    AddProduct(ProductId),
    /// Drop the whole line item.
    RemoveProduct(ProductId),
    /// Set the amount of a line item already in the cart.
    UpdateProductAmount(UpdateProductAmount),
}

/// Payload for [`CartCommand::UpdateProductAmount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: u32,
}

impl UpdateProductAmount {
    pub fn new(product_id: ProductId, amount: u32) -> Self {
        Self { product_id, amount }
    }
}
