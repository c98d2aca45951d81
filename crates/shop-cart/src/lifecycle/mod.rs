//! # System Lifecycle
//!
//! Starts the cart actor with its collaborators wired in, and shuts it down.
//!
//! ## Startup
//!
//! 1. Load the persisted snapshot. Absent means an empty cart. An unreadable or corrupt
//!    snapshot is logged and also yields an empty cart.
//! 2. Create the actor and its [`CartClient`](crate::clients::CartClient).
//! 3. Spawn `actor.run(context)`, injecting the [`CartContext`](crate::cart_actor::CartContext).
//!
//! ## Graceful Shutdown
//!
//! Dropping every client closes the channel; the actor finishes the request it is on,
//! logs `Shutdown` and exits. [`CartSystem::shutdown`] drops its own client and awaits
//! the task. Clones of the client held elsewhere keep the actor alive until they go too.
//!
//! Tracing is initialized by the binary through [`snapshot_actor::tracing::setup_tracing`].

pub mod cart_system;

pub use cart_system::*;
