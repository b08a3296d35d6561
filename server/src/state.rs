//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! relay is the only shared resource: it wraps the pooled outbound HTTP
//! client used to reach Bubble endpoints. There is no database — the relay
//! is stateless and every save stands alone.

use std::sync::Arc;

use crate::services::relay::Relay;

#[derive(Clone)]
pub struct AppState {
    /// Outbound forwarder for annotation saves.
    pub relay: Arc<Relay>,
}

impl AppState {
    #[must_use]
    pub fn new(relay: Relay) -> Self {
        Self { relay: Arc::new(relay) }
    }
}
