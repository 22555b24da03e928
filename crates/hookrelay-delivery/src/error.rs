//! Error types for outbound webhook delivery.
//!
//! Categorizes the ways a single delivery attempt can fail: connectivity,
//! timeout, a non-success response, or a misconfigured client. The relay
//! treats every variant the same way (the attempt failed, the request is
//! over), but the categories keep the server-side logs precise.

use thiserror::Error;

/// Result type alias for delivery operations.
pub type Result<T> = std::result::Result<T, DeliveryError>;

/// Error conditions for a single delivery attempt.
#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    /// Network-level connectivity failure.
    #[error("network connection failed: {message}")]
    Network {
        /// Detail describing the network failure.
        message: String,
    },

    /// HTTP request timeout exceeded.
    #[error("request timeout after {timeout_seconds}s")]
    Timeout {
        /// Number of seconds before the request timed out.
        timeout_seconds: u64,
    },

    /// The destination answered with a non-success status.
    #[error("destination returned HTTP {status}")]
    ErrorStatus {
        /// Status code the destination returned.
        status: u16,
    },

    /// The client could not be built from its configuration.
    #[error("invalid delivery configuration: {message}")]
    Configuration {
        /// Configuration error detail.
        message: String,
    },
}

impl DeliveryError {
    /// Creates a network error from a message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    /// Creates a timeout error.
    pub fn timeout(timeout_seconds: u64) -> Self {
        Self::Timeout { timeout_seconds }
    }

    /// Creates an error from a non-success HTTP status.
    pub fn error_status(status: u16) -> Self {
        Self::ErrorStatus { status }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }
}
