//! Error types for the cart actor.

use crate::model::ProductId;
use crate::ports::{Notification, ServiceError, StorageError};
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// Fetching the product or its stock failed while adding.
    #[error("Failed to add product {id}: {source}")]
    AddFailed {
        id: ProductId,
        #[source]
        source: ServiceError,
    },

    /// Fetching the stock failed while updating an amount.
    #[error("Failed to update amount of product {id}: {source}")]
    UpdateFailed {
        id: ProductId,
        #[source]
        source: ServiceError,
    },

    /// The requested quantity exceeds the available stock.
    #[error("Out of stock for product {id}: requested {requested}, available {available}")]
    OutOfStock {
        id: ProductId,
        requested: u32,
        available: u32,
    },

    /// Remove target is not in the cart.
    #[error("Product {0} is not in the cart")]
    NotInCart(ProductId),

    /// The new snapshot could not be persisted; the previous one is kept.
    #[error("Failed to persist cart: {0}")]
    Persistence(#[from] StorageError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    /// The notification shown to the shopper for this error, if any.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            CartError::AddFailed { id, .. } => Some(Notification::AddFailed(*id)),
            CartError::UpdateFailed { id, .. } => Some(Notification::UpdateFailed(*id)),
            CartError::OutOfStock { id, .. } => Some(Notification::OutOfStock(*id)),
            CartError::NotInCart(id) => Some(Notification::RemoveFailed(*id)),
            CartError::Persistence(_) => Some(Notification::SaveFailed),
            CartError::ActorCommunicationError(_) => None,
        }
    }
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications() {
        let id = ProductId(4);
        assert_eq!(
            CartError::NotInCart(id).notification(),
            Some(Notification::RemoveFailed(id))
        );
        assert_eq!(
            CartError::OutOfStock {
                id,
                requested: 3,
                available: 2
            }
            .notification(),
            Some(Notification::OutOfStock(id))
        );
        assert_eq!(
            CartError::from(StorageError::Io("disk full".into())).notification(),
            Some(Notification::SaveFailed)
        );
        assert_eq!(CartError::from("gone".to_string()).notification(), None);
    }
}
