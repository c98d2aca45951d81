//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` and `Shutdown`, with the final snapshot version
//! - **Commands**: `Apply` (debug, full command), then `Applied`, `Unchanged`, `Rejected`
//!   or `Commit failed`
//! - **Client calls**: spans from `#[instrument]` on domain client methods
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle + outcomes
//! RUST_LOG=debug cargo run    # plus full command payloads
//! ```
//!
//! Module paths are hidden (`with_target(false)`); the actor logs its `entity_type`
//! instead.

/// Initializes the global subscriber. Calling it again is a no-op.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
