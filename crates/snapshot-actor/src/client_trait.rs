//! # SnapshotHandle Trait
//!
//! Common interface for domain-specific clients: provides `current` and `send` on top of
//! a generic [`SnapshotClient`], mapped into the domain's own error type.
use crate::{FrameworkError, SnapshotClient, SnapshotEntity};
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for domain clients that wrap a [`SnapshotClient`].
///
/// # Example
///
/// ```rust
/// use snapshot_actor::{FrameworkError, SnapshotClient, SnapshotEntity, SnapshotHandle};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, Default)]
/// struct Counter(u32);
/// #[derive(Debug)] struct Bump;
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct CounterError(String);
///
/// #[async_trait]
/// impl SnapshotEntity for Counter {
///     type Command = Bump;
///     type Context = ();
///     type Error = CounterError;
///     async fn apply(&self, _: Bump, _: &()) -> Result<Option<Self>, Self::Error> {
///         Ok(Some(Counter(self.0 + 1)))
///     }
/// }
///
/// struct CounterClient { inner: SnapshotClient<Counter> }
///
/// #[async_trait]
/// impl SnapshotHandle<Counter> for CounterClient {
///     type Error = CounterError;
///     fn inner(&self) -> &SnapshotClient<Counter> { &self.inner }
///     fn map_error(e: FrameworkError) -> CounterError { CounterError(e.to_string()) }
/// }
///
/// async fn usage(client: CounterClient) {
///     // current() and send() are provided automatically
///     let _ = client.send(Bump).await;
///     let _ = client.current().await;
/// }
/// ```
#[async_trait]
pub trait SnapshotHandle<T: SnapshotEntity>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &SnapshotClient<T>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the current snapshot.
    #[tracing::instrument(skip(self))]
    async fn current(&self) -> Result<Arc<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Apply a command and return the resulting snapshot.
    #[tracing::instrument(skip(self))]
    async fn send(&self, command: T::Command) -> Result<Arc<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().apply(command).await.map_err(Self::map_error)
    }
}
