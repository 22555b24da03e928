//! Health check handlers for service monitoring.
//!
//! The relay holds no external dependencies at runtime (the webhook
//! destination is only contacted on submit), so both probes are
//! lightweight process-liveness checks.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument};

/// Health check response structure.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service health status.
    pub status: &'static str,
    /// Timestamp when the check was performed.
    pub timestamp: DateTime<Utc>,
    /// Service version information.
    pub version: &'static str,
}

/// Health check endpoint handler.
///
/// Designed to be called frequently by orchestration systems and load
/// balancers, so it performs no expensive work.
#[instrument(name = "health_check")]
pub async fn health_check() -> Response {
    debug!("Performing health check");

    let response = HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Liveness check endpoint for orchestration probes.
///
/// Returns a minimal response indicating the service process is alive.
#[instrument(name = "liveness_check")]
pub async fn liveness_check() -> Response {
    let response = serde_json::json!({
        "status": "alive",
        "timestamp": Utc::now(),
        "service": "hookrelay-api",
    });

    (StatusCode::OK, Json(response)).into_response()
}
