//! # Mock Framework & Testing Guide
//!
//! Test doubles for the client side of a snapshot actor.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real snapshot |
//! | **Use Case** | Unit testing logic *around* the client | Testing the entity or full system |
//! | **Error Injection** | Easy (`return_err`) | Requires a failing dependency |
//!
//! ## Patterns
//!
//! - **Pure mock**: [`create_mock_client`] + [`expect_apply`] when the test wants to inspect
//!   the exact command a domain client sends.
//! - **Fluent mock**: [`MockClient`] with queued expectations when the test only cares about
//!   what the client does with the response.
//!
//! ```rust
//! use snapshot_actor::mock::MockClient;
//! use snapshot_actor::{FrameworkError, SnapshotEntity};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Counter(u32);
//! #[derive(Debug)] struct Bump;
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct CounterError;
//!
//! #[async_trait]
//! impl SnapshotEntity for Counter {
//!     type Command = Bump; type Context = (); type Error = CounterError;
//!     async fn apply(&self, _: Bump, _: &()) -> Result<Option<Self>, Self::Error> { Ok(None) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Counter>::new();
//!     mock.expect_apply().return_ok(Counter(3));
//!     mock.expect_snapshot().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(*client.apply(Bump).await.unwrap(), Counter(3));
//!     assert!(matches!(client.snapshot().await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::SnapshotClient;
use crate::entity::SnapshotEntity;
use crate::error::FrameworkError;
use crate::message::SnapshotRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: SnapshotEntity> {
    Snapshot {
        response: Result<Arc<T>, FrameworkError>,
    },
    Apply {
        response: Result<Arc<T>, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were queued. A request that does not
/// match the next expectation panics the mock task, which surfaces as `ActorDropped`
/// on the caller's side.
pub struct MockClient<T: SnapshotEntity> {
    client: SnapshotClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    commands: Arc<Mutex<Vec<T::Command>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: SnapshotEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SnapshotEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<SnapshotRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();
        let commands = Arc::new(Mutex::new(Vec::new()));
        let commands_clone = commands.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        SnapshotRequest::Get { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        SnapshotRequest::Apply {
                            command,
                            respond_to,
                        },
                        Some(Expectation::Apply { response }),
                    ) => {
                        commands_clone.lock().unwrap().push(command);
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: SnapshotClient::new(sender),
            expectations,
            commands,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> SnapshotClient<T> {
        self.client.clone()
    }

    /// Expects a `snapshot` read.
    pub fn expect_snapshot(&mut self) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            apply: false,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `apply` call.
    pub fn expect_apply(&mut self) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            apply: true,
            expectations: self.expectations.clone(),
        }
    }

    /// Drains the commands received so far.
    pub fn take_commands(&self) -> Vec<T::Command> {
        std::mem::take(&mut *self.commands.lock().unwrap())
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for a queued expectation.
pub struct ExpectationBuilder<T: SnapshotEntity> {
    apply: bool,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: SnapshotEntity> ExpectationBuilder<T> {
    /// Sets the expectation to answer with `snapshot`.
    pub fn return_ok(self, snapshot: T) {
        self.push(Ok(Arc::new(snapshot)));
    }

    /// Sets the expectation to answer with an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Arc<T>, FrameworkError>) {
        let expectation = if self.apply {
            Expectation::Apply { response }
        } else {
            Expectation::Snapshot { response }
        };
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
///
/// The test plays the actor: pull the next request with [`expect_apply`] or
/// [`expect_get`], assert on it, and answer through the returned responder.
pub fn create_mock_client<T: SnapshotEntity>(
    buffer_size: usize,
) -> (SnapshotClient<T>, mpsc::Receiver<SnapshotRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SnapshotClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Apply request
pub async fn expect_apply<T: SnapshotEntity>(
    receiver: &mut mpsc::Receiver<SnapshotRequest<T>>,
) -> Option<(
    T::Command,
    oneshot::Sender<Result<Arc<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(SnapshotRequest::Apply {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: SnapshotEntity>(
    receiver: &mut mpsc::Receiver<SnapshotRequest<T>>,
) -> Option<oneshot::Sender<Result<Arc<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(SnapshotRequest::Get { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Names(Vec<String>);

    #[derive(Debug, PartialEq)]
    enum NamesCommand {
        Add(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Names error")]
    struct NamesError;

    #[async_trait]
    impl SnapshotEntity for Names {
        type Command = NamesCommand;
        type Context = ();
        type Error = NamesError;

        async fn apply(
            &self,
            _command: NamesCommand,
            _ctx: &Self::Context,
        ) -> Result<Option<Self>, Self::Error> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_channel_mock_sees_command() {
        let (client, mut receiver) = create_mock_client::<Names>(10);

        let apply_task =
            tokio::spawn(async move { client.apply(NamesCommand::Add("Ada".into())).await });

        let (command, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        assert_eq!(command, NamesCommand::Add("Ada".into()));
        responder
            .send(Ok(Arc::new(Names(vec!["Ada".into()]))))
            .unwrap();

        let result = apply_task.await.unwrap().unwrap();
        assert_eq!(result.0, vec!["Ada".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Names>::new();
        mock.expect_snapshot().return_ok(Names(vec![]));
        mock.expect_apply().return_ok(Names(vec!["Grace".into()]));

        let client = mock.client();
        assert!(client.snapshot().await.unwrap().0.is_empty());
        let after = client.apply(NamesCommand::Add("Grace".into())).await.unwrap();
        assert_eq!(after.0, vec!["Grace".to_string()]);

        assert_eq!(
            mock.take_commands(),
            vec![NamesCommand::Add("Grace".into())]
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatch_surfaces_as_dropped() {
        let mut mock = MockClient::<Names>::new();
        mock.expect_snapshot().return_ok(Names(vec![]));

        let result = mock.client().apply(NamesCommand::Add("Linus".into())).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
