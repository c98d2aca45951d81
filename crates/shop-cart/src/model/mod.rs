//! Pure data structures. [`Cart`] implements [`SnapshotEntity`](snapshot_actor::SnapshotEntity)
//! in [`crate::cart_actor::entity`].

pub mod cart;
pub mod product;
pub mod stock;

pub use cart::*;
pub use product::*;
pub use stock::*;
