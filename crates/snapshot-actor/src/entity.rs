//! # SnapshotEntity Trait
//!
//! The `SnapshotEntity` trait defines the contract for any state that is owned by a single
//! [`SnapshotActor`](crate::SnapshotActor). The actor holds exactly one immutable value of
//! the entity and replaces it wholesale whenever a command succeeds.
//!
//! # Architecture Note
//! The entity never mutates itself. [`SnapshotEntity::apply`] receives `&self` and returns the
//! *next* value, so a command that fails halfway through has nothing to roll back: the
//! current snapshot was never touched.
//!
//! # Provided Methods (Hooks)
//! - [`SnapshotEntity::on_commit`]: runs on the candidate snapshot before the swap (persist it here).
//! - [`SnapshotEntity::on_reject`]: runs on the current snapshot after any failure (report it here).
//!
//! Both default to doing nothing.

use async_trait::async_trait;
use std::fmt::Debug;

/// State managed by a [`SnapshotActor`](crate::SnapshotActor).
///
/// # Async & Context
/// The trait is `#[async_trait]` so `apply` and `on_commit` can await external services.
/// The `Context` associated type is injected into every hook at `run()` time, the same
/// "late binding" the actor uses to receive its dependencies.
#[async_trait]
pub trait SnapshotEntity: Clone + Send + Sync + 'static {
    /// The commands this entity understands (e.g., `AddProduct`).
    type Command: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per entity, shared by every command, so callers only ever match on a
    /// single error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the snapshot that follows `command`.
    ///
    /// Returns `Ok(None)` when the command is accepted but changes nothing; the actor then
    /// skips the commit and keeps the current snapshot.
    async fn apply(
        &self,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Option<Self>, Self::Error>;

    /// Called on the candidate snapshot before it replaces the current one.
    ///
    /// An error here discards the candidate.
    async fn on_commit(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called on the current snapshot when `apply` or `on_commit` fails.
    fn on_reject(&self, _error: &Self::Error, _ctx: &Self::Context) {}
}
