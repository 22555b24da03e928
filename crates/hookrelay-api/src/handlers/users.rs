//! Relay operation handlers: create user, submit data, fetch data.
//!
//! The submit handler is the relay's center: it associates the payload
//! with the user id, validates the configured destination, and forwards
//! `{id, data}` with exactly one delivery attempt. The response is not
//! sent until the attempt resolves.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hookrelay_core::{
    models::{UserData, UserId, UserRecord},
    RelayError,
};
use hookrelay_delivery::client::ForwardPayload;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::AppState;

/// Request body for user creation.
///
/// All fields are accepted as-is; no format validation is performed.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Identity key for the record.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

/// Standard response body: a fixed message, optionally echoing data.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Fixed acknowledgment or error message.
    pub message: String,
    /// Echoed record or payload, present on success responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Creates a user record.
///
/// Stores the record in the shared store keyed by its id and acknowledges
/// with the stored record echoed back. This operation has no failure mode
/// beyond a malformed JSON body, which the extractor rejects.
#[instrument(name = "create_user", skip(state, request), fields(user_id = %request.id))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Response {
    let record = UserRecord {
        id: UserId::new(request.id),
        name: request.name,
        email: request.email,
    };

    let echoed = serde_json::to_value(&record).unwrap_or(Value::Null);

    state.store.put_user(record).await;
    info!("User record stored");

    (
        StatusCode::OK,
        Json(MessageResponse {
            message: "User created successfully".to_string(),
            data: Some(echoed),
        }),
    )
        .into_response()
}

/// Submits a data payload for a user and forwards it to the webhook.
///
/// The payload is associated with the user id first, then the configured
/// destination is resolved and validated. A missing or malformed
/// destination fails the request without any network attempt. Otherwise a
/// single outbound POST carries `{id, data}`; its outcome decides the
/// response. No retry is made in either direction.
#[instrument(name = "submit_user_data", skip(state, payload), fields(user_id = %id))]
pub async fn submit_user_data(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UserData>,
) -> Response {
    let id = UserId::new(id);

    state.store.put_data(id.clone(), payload.clone()).await;
    debug!("Payload associated with user");

    let destination = match resolve_destination(state.config.zapier_webhook_url.as_deref()) {
        Ok(url) => url,
        Err(e) => {
            error!(error = %e, "Rejecting forward without network attempt");
            return error_response(&e);
        },
    };

    let forward = ForwardPayload { id, data: payload.clone() };

    match state.forwarder.deliver(destination, forward).await {
        Ok(receipt) => {
            info!(
                status = receipt.status_code,
                duration_ms = receipt.duration.as_millis(),
                "Payload forwarded"
            );
            (
                StatusCode::OK,
                Json(MessageResponse {
                    message: "Data posted successfully".to_string(),
                    data: Some(payload),
                }),
            )
                .into_response()
        },
        Err(e) => {
            error!(error = %e, "Webhook delivery failed");
            error_response(&RelayError::delivery_failed(e.to_string()))
        },
    }
}

/// Fetches the data payload associated with a user.
///
/// Returns the stored payload as the raw JSON body on a hit, or the fixed
/// not-found message on a miss.
#[instrument(name = "fetch_user_data", skip(state), fields(user_id = %id))]
pub async fn fetch_user_data(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Response {
    let id = UserId::new(id);

    match state.store.get_data(id.clone()).await {
        Some(data) => (StatusCode::OK, Json(data)).into_response(),
        None => {
            debug!("No data associated with user");
            error_response(&RelayError::user_not_found(id))
        },
    }
}

/// Resolves and validates the configured webhook destination.
///
/// Absence and malformed syntax are the same handled error; neither
/// triggers a network attempt.
fn resolve_destination(configured: Option<&str>) -> Result<Url, RelayError> {
    let raw = configured
        .ok_or_else(|| RelayError::invalid_destination("webhook URL not configured"))?;

    Url::parse(raw)
        .map_err(|e| RelayError::invalid_destination(format!("{raw:?} is not a valid URL: {e}")))
}

/// Maps a relay error onto its fixed HTTP response.
fn error_response(error: &RelayError) -> Response {
    let status = StatusCode::from_u16(error.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(MessageResponse { message: error.public_message().to_string(), data: None }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_destination_is_invalid() {
        let error = resolve_destination(None).unwrap_err();
        assert!(matches!(error, RelayError::InvalidDestination { .. }));
        assert_eq!(error.public_message(), "Invalid Zapier webhook URL");
    }

    #[test]
    fn malformed_destination_is_invalid() {
        let error = resolve_destination(Some("not a url")).unwrap_err();
        assert!(matches!(error, RelayError::InvalidDestination { .. }));
    }

    #[test]
    fn relative_destination_is_invalid() {
        // A bare path has no scheme, so URL parsing rejects it.
        let error = resolve_destination(Some("/hooks/catch")).unwrap_err();
        assert!(matches!(error, RelayError::InvalidDestination { .. }));
    }

    #[test]
    fn well_formed_destination_resolves() {
        let url = resolve_destination(Some("https://hooks.zapier.com/hooks/catch/1/a"))
            .expect("valid URL");
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("hooks.zapier.com"));
    }

    #[test]
    fn error_responses_use_mapped_status() {
        let response = error_response(&RelayError::user_not_found(UserId::new("7")));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = error_response(&RelayError::invalid_destination("unset"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
