//! The cart snapshot.
//!
//! A [`Cart`] is an ordered list of line items with at most one entry per product and
//! every `amount >= 1`. It serializes as a bare JSON array, which is the shape stored
//! under the cart key.
//!
//! Transition helpers (`with_line`, `with_amount`, `without`) return a new cart and
//! leave `self` untouched. They assume the caller already validated the request against
//! stock; see [`crate::cart_actor::entity`].

use crate::model::{Product, ProductId};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from raw line items, keeping the first entry per product and
    /// dropping entries with a zero amount.
    pub fn from_items(items: impl IntoIterator<Item = Product>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.amount > 0 && !cart.contains(item.id) {
                cart.items.push(item);
            }
        }
        cart
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.items.iter()
    }

    /// Sum of all selected amounts.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|p| p.amount).sum()
    }

    /// Sum of all line subtotals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(Product::subtotal).sum()
    }

    /// Appends `line`. The caller guarantees `line.id` is not in the cart yet.
    pub(crate) fn with_line(&self, line: Product) -> Self {
        debug_assert!(!self.contains(line.id));
        let mut items = self.items.clone();
        items.push(line);
        Self { items }
    }

    /// Sets the amount of `id`, keeping its position.
    pub(crate) fn with_amount(&self, id: ProductId, amount: u32) -> Self {
        let items = self
            .items
            .iter()
            .map(|p| {
                if p.id == id {
                    p.clone().with_amount(amount)
                } else {
                    p.clone()
                }
            })
            .collect();
        Self { items }
    }

    /// Drops the line item for `id`.
    pub(crate) fn without(&self, id: ProductId) -> Self {
        let items = self.items.iter().filter(|p| p.id != id).cloned().collect();
        Self { items }
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Product>::deserialize(deserializer).map(Cart::from_items)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
