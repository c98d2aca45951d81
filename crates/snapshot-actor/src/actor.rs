//! # Snapshot Actor Server
//!
//! The `SnapshotActor` owns exactly one value of its entity and is the only place that
//! value is ever replaced. Requests are handled one at a time, including the awaits
//! inside [`SnapshotEntity::apply`], so two commands can never interleave on the same
//! snapshot.

use crate::client::SnapshotClient;
use crate::entity::SnapshotEntity;
use crate::error::FrameworkError;
use crate::message::SnapshotRequest;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns a single snapshot.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`snapshot`) and the
/// receiver end of the channel. Readers receive `Arc` clones of the snapshot, which stay
/// valid and unchanged even after the actor moves on to a newer one.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `SnapshotActor::new()` with the initial value.
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust
/// use snapshot_actor::{SnapshotActor, SnapshotEntity};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, Default)]
/// struct Tally(Vec<u32>);
/// #[derive(Debug)] struct Push(u32);
/// #[derive(Debug, thiserror::Error)] #[error("tally error")] struct TallyError;
///
/// #[async_trait]
/// impl SnapshotEntity for Tally {
///     type Command = Push;
///     type Context = ();
///     type Error = TallyError;
///     async fn apply(&self, cmd: Push, _: &()) -> Result<Option<Self>, Self::Error> {
///         let mut next = self.0.clone();
///         next.push(cmd.0);
///         Ok(Some(Tally(next)))
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = SnapshotActor::new(Tally::default(), 10);
///     tokio::spawn(actor.run(()));
///
///     let tally = client.apply(Push(7)).await.unwrap();
///     assert_eq!(tally.0, vec![7]);
/// }
/// ```
///
/// # Apply Sequence
///
/// 1. `current.apply(command, ctx)` computes the candidate.
///    - `Ok(None)`: nothing to do, the current snapshot is returned.
///    - `Err(e)`: `current.on_reject(&e, ctx)` runs, the error is returned.
/// 2. `candidate.on_commit(ctx)` runs (e.g., persistence).
///    - `Err(e)`: the candidate is dropped, `current.on_reject(&e, ctx)` runs.
/// 3. The candidate becomes the current snapshot and is returned.
pub struct SnapshotActor<T: SnapshotEntity> {
    receiver: mpsc::Receiver<SnapshotRequest<T>>,
    snapshot: Arc<T>,
    version: u64,
}

impl<T: SnapshotEntity> SnapshotActor<T> {
    /// Creates a new `SnapshotActor` and its associated `SnapshotClient`.
    ///
    /// # Arguments
    ///
    /// * `initial` - The snapshot the actor starts with.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(initial: T, buffer_size: usize) -> (Self, SnapshotClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            snapshot: Arc::new(initial),
            version: 0,
        };
        (actor, SnapshotClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Cart" instead of "shop_cart::model::cart::Cart")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SnapshotRequest::Get { respond_to } => {
                    debug!(entity_type, version = self.version, "Get");
                    let _ = respond_to.send(Ok(self.snapshot.clone()));
                }
                SnapshotRequest::Apply {
                    command,
                    respond_to,
                } => {
                    debug!(entity_type, ?command, "Apply");
                    let result = self.apply(entity_type, command, &context).await;
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, version = self.version, "Shutdown");
    }

    async fn apply(
        &mut self,
        entity_type: &str,
        command: T::Command,
        context: &T::Context,
    ) -> Result<Arc<T>, FrameworkError> {
        let candidate = match self.snapshot.apply(command, context).await {
            Ok(Some(candidate)) => candidate,
            Ok(None) => {
                debug!(entity_type, version = self.version, "Unchanged");
                return Ok(self.snapshot.clone());
            }
            Err(e) => {
                warn!(entity_type, error = %e, "Rejected");
                self.snapshot.on_reject(&e, context);
                return Err(FrameworkError::EntityError(Box::new(e)));
            }
        };

        if let Err(e) = candidate.on_commit(context).await {
            warn!(entity_type, error = %e, "Commit failed");
            self.snapshot.on_reject(&e, context);
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        self.snapshot = Arc::new(candidate);
        self.version += 1;
        info!(entity_type, version = self.version, "Applied");
        Ok(self.snapshot.clone())
    }
}
