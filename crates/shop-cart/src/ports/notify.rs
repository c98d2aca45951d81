//! # Notification Port
//!
//! User-facing messages for rejected cart commands. The cart reports through this trait
//! and never talks to a UI toolkit directly.

use crate::model::ProductId;
use std::fmt::Display;

/// A transient, non-blocking message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    AddFailed(ProductId),
    RemoveFailed(ProductId),
    UpdateFailed(ProductId),
    OutOfStock(ProductId),
    SaveFailed,
}

impl Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Notification::AddFailed(_) => "Failed to add product",
            Notification::RemoveFailed(_) => "Failed to remove product",
            Notification::UpdateFailed(_) => "Failed to update product amount",
            Notification::OutOfStock(_) => "Requested quantity is out of stock",
            Notification::SaveFailed => "Failed to save cart",
        };
        f.write_str(message)
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
