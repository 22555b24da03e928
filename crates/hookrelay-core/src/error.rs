//! Error types and result handling for relay operations.
//!
//! Defines the small taxonomy the HTTP surface maps onto fixed responses.
//! Every variant carries internal detail for server-side logging, while
//! callers only ever see the fixed public message for that variant.

use thiserror::Error;

use crate::models::UserId;

/// Result type alias using `RelayError`.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Relay error taxonomy.
///
/// All failures are terminal for the request. There are no retries or
/// partial-success states; callers re-submit if they want another attempt.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The configured webhook destination is missing or not a well-formed
    /// URL. Raised before any network attempt is made.
    #[error("invalid webhook destination: {reason}")]
    InvalidDestination {
        /// Internal detail describing what was wrong with the destination.
        reason: String,
    },

    /// The outbound delivery attempt was made and reported failure.
    #[error("delivery failed: {reason}")]
    DeliveryFailed {
        /// Internal detail from the forwarding collaborator.
        reason: String,
    },

    /// No data is associated with the requested user id.
    #[error("user {id} not found")]
    UserNotFound {
        /// The id that missed.
        id: UserId,
    },
}

impl RelayError {
    /// Creates an invalid-destination error from internal detail.
    pub fn invalid_destination(reason: impl Into<String>) -> Self {
        Self::InvalidDestination { reason: reason.into() }
    }

    /// Creates a delivery-failed error from internal detail.
    pub fn delivery_failed(reason: impl Into<String>) -> Self {
        Self::DeliveryFailed { reason: reason.into() }
    }

    /// Creates a user-not-found error.
    pub fn user_not_found(id: UserId) -> Self {
        Self::UserNotFound { id }
    }

    /// HTTP status code this error maps to.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidDestination { .. } | Self::DeliveryFailed { .. } => 500,
            Self::UserNotFound { .. } => 404,
        }
    }

    /// Fixed message returned to callers.
    ///
    /// Internal detail stays in the server logs; the response body never
    /// varies for a given variant.
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidDestination { .. } => "Invalid Zapier webhook URL",
            Self::DeliveryFailed { .. } => "Error posting data",
            Self::UserNotFound { .. } => "User not found",
        }
    }
}
