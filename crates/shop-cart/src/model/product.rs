//! A product line item.
//!
//! The same struct decodes the record served by `GET /products/{id}` (which carries no
//! `amount`) and the entries of a persisted cart snapshot (which do).
//!
//! `title`, `price` and `image` are display fields: the cart stores and returns them but
//! never makes a decision based on them.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: String,
    /// Quantity selected. Zero on records that come straight from the product service.
    #[serde(default)]
    pub amount: u32,
}

impl Product {
    /// Creates a product record with no quantity selected.
    ///
    /// # Arguments
    /// * `id` - Product identifier
    /// * `title` - Display title
    /// * `price` - Unit price
    /// * `image` - Image URL
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
            amount: 0,
        }
    }

    /// Returns the same product with `amount` selected.
    pub fn with_amount(self, amount: u32) -> Self {
        Self { amount, ..self }
    }

    /// `price * amount`.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}
