//! # Generic Messages
//!
//! Message types exchanged between [`SnapshotClient`](crate::SnapshotClient) and
//! [`SnapshotActor`](crate::SnapshotActor).

use crate::entity::SnapshotEntity;
use crate::error::FrameworkError;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a snapshot actor.
///
/// There are only two things a caller can do with a snapshot: read it, or ask for the
/// next one. Both answer with the snapshot that is current once the request is handled.
#[derive(Debug)]
pub enum SnapshotRequest<T: SnapshotEntity> {
    Get {
        respond_to: Response<Arc<T>>,
    },
    Apply {
        command: T::Command,
        respond_to: Response<Arc<T>>,
    },
}
