//! Domain models and the strongly-typed user identifier.
//!
//! Defines the user record accepted by the API and the newtype ID wrapper
//! that keys both records and payloads. Identifiers are caller-supplied
//! strings; no format is imposed on them or on any record field.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Strongly-typed user identifier.
///
/// Wraps the caller-supplied string so it cannot be confused with other
/// string values. Serializes transparently as a plain JSON string, which is
/// the shape the outbound `{id, data}` body requires.
///
/// # Example
///
/// ```
/// use hookrelay_core::models::UserId;
/// let id = UserId::new("7");
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Creates a user id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A user record as accepted by the create-user operation.
///
/// All fields are stored verbatim. The service performs no format
/// validation on any of them, matching the accept-anything contract of the
/// create operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Identity key for the record.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email, stored verbatim.
    pub email: String,
}

/// Arbitrary JSON payload associated with a user.
///
/// The relay treats payloads as opaque documents: they are stored and
/// forwarded without inspection.
pub type UserData = serde_json::Value;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn user_id_serializes_as_plain_string() {
        let id = UserId::new("7");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("7"));
    }

    #[test]
    fn user_record_serializes_with_flat_fields() {
        let record = UserRecord {
            id: UserId::new("7"),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"id": "7", "name": "Ada", "email": "ada@example.com"}));
    }

    #[test]
    fn user_record_accepts_unvalidated_fields() {
        let record: UserRecord =
            serde_json::from_value(json!({"id": "", "name": "", "email": "not-an-email"}))
                .unwrap();

        assert_eq!(record.id, UserId::new(""));
        assert_eq!(record.email, "not-an-email");
    }
}
