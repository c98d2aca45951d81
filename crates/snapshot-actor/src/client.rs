//! # Generic Client
//!
//! The client half of a snapshot actor.

use crate::entity::SnapshotEntity;
use crate::error::FrameworkError;
use crate::message::SnapshotRequest;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle for talking to a [`SnapshotActor`](crate::SnapshotActor).
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – every call resolves to `Result<Arc<T>, FrameworkError>`.
#[derive(Clone)]
pub struct SnapshotClient<T: SnapshotEntity> {
    sender: mpsc::Sender<SnapshotRequest<T>>,
}

impl<T: SnapshotEntity> SnapshotClient<T> {
    pub fn new(sender: mpsc::Sender<SnapshotRequest<T>>) -> Self {
        Self { sender }
    }

    /// Returns the current snapshot.
    pub async fn snapshot(&self) -> Result<Arc<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SnapshotRequest::Get { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Applies `command` and returns the snapshot that is current afterwards.
    pub async fn apply(&self, command: T::Command) -> Result<Arc<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SnapshotRequest::Apply {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// True once the actor has stopped receiving.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
