//! # Snapshot Actor
//!
//! Building blocks for state that is owned by exactly one task and replaced, never mutated.
//!
//! ## Why a Snapshot Actor?
//!
//! Client-side state such as a shopping cart is read often, changed rarely, and every
//! change needs a round-trip to some service before it can be accepted. Mutating a shared
//! value across those awaits lets one call observe (and persist) another call's
//! half-finished work. This crate removes that hazard with two rules:
//!
//! - **One owner**: a [`SnapshotActor`] task holds the value and handles commands one at a
//!   time, awaits included.
//! - **Replace, don't mutate**: [`SnapshotEntity::apply`] computes the *next* value from
//!   `&self`; the actor swaps it in only after [`SnapshotEntity::on_commit`] succeeds.
//!
//! Readers get `Arc<T>` clones, so a snapshot handed out is never changed underneath them.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`SnapshotEntity`]) - your state and its transitions
//! 2. **Runtime Layer** ([`SnapshotActor`]) - sequential command processing and the swap
//! 3. **Interface Layer** ([`SnapshotClient`], [`SnapshotHandle`]) - type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use snapshot_actor::{SnapshotActor, SnapshotEntity};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, Default)]
//! struct Balance(i64);
//!
//! #[derive(Debug)]
//! enum BalanceCommand { Deposit(i64), Withdraw(i64) }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("insufficient funds")]
//! struct Overdrawn;
//!
//! #[async_trait]
//! impl SnapshotEntity for Balance {
//!     type Command = BalanceCommand;
//!     type Context = ();
//!     type Error = Overdrawn;
//!
//!     async fn apply(&self, cmd: BalanceCommand, _: &()) -> Result<Option<Self>, Overdrawn> {
//!         match cmd {
//!             BalanceCommand::Deposit(0) => Ok(None),
//!             BalanceCommand::Deposit(n) => Ok(Some(Balance(self.0 + n))),
//!             BalanceCommand::Withdraw(n) if n > self.0 => Err(Overdrawn),
//!             BalanceCommand::Withdraw(n) => Ok(Some(Balance(self.0 - n))),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = SnapshotActor::new(Balance::default(), 10);
//!     tokio::spawn(actor.run(()));
//!
//!     client.apply(BalanceCommand::Deposit(10)).await.unwrap();
//!     assert!(client.apply(BalanceCommand::Withdraw(50)).await.is_err());
//!     assert_eq!(client.snapshot().await.unwrap().0, 10);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies (service clients, storage handles, notifiers) are passed to `run()`, not
//! `new()`, and reach every hook as `&Self::Context`.
//!
//! ## Testing
//!
//! See the [`mock`] module for a fluent [`mock::MockClient`] and channel-level helpers.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::SnapshotActor;
pub use client::SnapshotClient;
pub use client_trait::SnapshotHandle;
pub use entity::SnapshotEntity;
pub use error::FrameworkError;
pub use message::{Response, SnapshotRequest};
