//! Cart-specific snapshot logic: commands, errors and the [`SnapshotEntity`] impl for
//! [`Cart`].
//!
//! [`SnapshotEntity`]: snapshot_actor::SnapshotEntity

pub mod actions;
pub mod context;
pub mod entity;
pub mod error;

pub use actions::*;
pub use context::*;
pub use error::*;

use crate::clients::CartClient;
use crate::model::Cart;
use snapshot_actor::SnapshotActor;

/// Creates a new cart actor starting from `initial`, and its client.
pub fn new(initial: Cart, buffer_size: usize) -> (SnapshotActor<Cart>, CartClient) {
    let (actor, generic_client) = SnapshotActor::new(initial, buffer_size);
    (actor, CartClient::new(generic_client))
}
