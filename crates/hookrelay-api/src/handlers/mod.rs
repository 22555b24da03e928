//! HTTP request handlers for the hookrelay API.
//!
//! Handlers follow a consistent pattern: tracing for observability,
//! store and forwarder access through `AppState`, and fixed response
//! bodies. Error detail is logged server-side; callers only ever see the
//! fixed message for each failure.
//!
//! # Handler Organization
//!
//! - `users` - the three relay operations (create, submit, fetch)
//! - `health` - health and liveness probes

pub mod health;
pub mod users;

// Re-export handlers for convenient access
pub use health::{health_check, liveness_check};
pub use users::{create_user, fetch_user_data, submit_user_data};
