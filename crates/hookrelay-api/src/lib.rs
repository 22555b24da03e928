//! Hookrelay HTTP API.
//!
//! Exposes the three relay operations (create user, submit user data,
//! fetch user data) plus health probes, backed by the shared store and the
//! outbound forwarding collaborator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod server;

use std::sync::Arc;

use hookrelay_core::store::RelayStore;
use hookrelay_delivery::client::Forwarder;

pub use config::Config;
pub use server::{create_router, start_server};

/// Shared application state handed to every request handler.
///
/// Built once at startup. The store and forwarder are trait objects so
/// tests can substitute doubles for either collaborator.
#[derive(Clone)]
pub struct AppState {
    /// Store holding user records and payloads for the process lifetime.
    pub store: Arc<dyn RelayStore>,
    /// Outbound forwarding collaborator.
    pub forwarder: Arc<dyn Forwarder>,
    /// Service configuration. The webhook destination is read from here on
    /// every submit request, not cached.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates application state from its collaborators.
    pub fn new(
        store: Arc<dyn RelayStore>,
        forwarder: Arc<dyn Forwarder>,
        config: Config,
    ) -> Self {
        Self { store, forwarder, config: Arc::new(config) }
    }
}
