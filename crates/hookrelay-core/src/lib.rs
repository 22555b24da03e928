//! Core domain models for the hookrelay service.
//!
//! Provides the user record and payload types, the relay error taxonomy,
//! and the key-value store abstraction shared by the HTTP handlers. The
//! other crates depend on these foundational types for consistency.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod store;

pub use error::{RelayError, Result};
pub use models::{UserData, UserId, UserRecord};
pub use store::{MemoryStore, RelayStore};
