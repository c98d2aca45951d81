use crate::model::ProductId;
use serde::{Deserialize, Serialize};

/// Available quantity for a product, as reported by `GET /stock/{id}`.
///
/// Read-only: the cart checks requests against it and never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: u32,
}

impl Stock {
    pub fn new(id: ProductId, amount: u32) -> Self {
        Self { id, amount }
    }

    /// True if `requested` units can be taken from this stock.
    pub fn allows(&self, requested: u32) -> bool {
        requested <= self.amount
    }
}
