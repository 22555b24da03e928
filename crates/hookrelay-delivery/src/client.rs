//! HTTP client for forwarding payloads to the configured webhook.
//!
//! Handles request construction, timeout enforcement, and error
//! categorization for a single delivery attempt. The destination's
//! response body is never inspected; only success or failure of the
//! request matters to the relay.

use std::{future::Future, pin::Pin, time::Duration};

use hookrelay_core::models::{UserData, UserId};
use serde::Serialize;
use tracing::{info_span, Instrument};
use url::Url;

use crate::error::{DeliveryError, Result};

/// Configuration for the outbound webhook client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Timeout for the full request. Expiry counts as a failed delivery.
    pub timeout: Duration,
    /// User agent string for outbound requests.
    pub user_agent: String,
    /// Maximum number of redirects to follow.
    pub max_redirects: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECONDS),
            user_agent: "Hookrelay-Forwarder/1.0".to_string(),
            max_redirects: 3,
        }
    }
}

/// JSON body carried to the destination: `{"id": ..., "data": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct ForwardPayload {
    /// The user id the payload is tagged with.
    pub id: UserId,
    /// The payload as submitted by the caller.
    pub data: UserData,
}

/// Outcome of a completed delivery attempt.
#[derive(Debug, Clone)]
pub struct ForwardReceipt {
    /// HTTP status code the destination returned.
    pub status_code: u16,
    /// Total duration of the request.
    pub duration: Duration,
}

/// Collaborator that carries a payload to a destination.
///
/// One method, one attempt. Implementations must not retry; the caller
/// treats any error as terminal for the request.
pub trait Forwarder: Send + Sync + 'static {
    /// Delivers the payload to the destination, resolving once the attempt
    /// completes.
    fn deliver(
        &self,
        destination: Url,
        payload: ForwardPayload,
    ) -> Pin<Box<dyn Future<Output = Result<ForwardReceipt>> + Send + '_>>;
}

/// Production forwarder backed by `reqwest`.
///
/// Uses connection pooling and a bounded timeout. A non-success status
/// from the destination is reported as a delivery failure, matching the
/// relay's success-or-failure contract.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl WebhookClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError::Configuration` if the HTTP client cannot be
    /// built from the provided settings.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects as usize))
            .build()
            .map_err(|e| {
                DeliveryError::configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Creates a new client with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    async fn send(&self, destination: Url, payload: ForwardPayload) -> Result<ForwardReceipt> {
        let start_time = std::time::Instant::now();

        let span = info_span!(
            "webhook_forward",
            user_id = %payload.id,
            destination = %destination,
        );

        async move {
            tracing::debug!("Starting webhook forward");

            let response = match self.client.post(destination).json(&payload).send().await {
                Ok(response) => response,
                Err(e) => {
                    let duration = start_time.elapsed();
                    tracing::warn!(duration_ms = duration.as_millis(), "Request failed: {}", e);

                    if e.is_timeout() {
                        return Err(DeliveryError::timeout(self.config.timeout.as_secs()));
                    }
                    if e.is_connect() {
                        return Err(DeliveryError::network(format!("connection failed: {e}")));
                    }
                    return Err(DeliveryError::network(e.to_string()));
                },
            };

            let duration = start_time.elapsed();
            let status = response.status();

            if !status.is_success() {
                tracing::warn!(
                    status = status.as_u16(),
                    duration_ms = duration.as_millis(),
                    "Destination rejected payload"
                );
                return Err(DeliveryError::error_status(status.as_u16()));
            }

            tracing::info!(
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                "Payload forwarded"
            );

            Ok(ForwardReceipt { status_code: status.as_u16(), duration })
        }
        .instrument(span)
        .await
    }
}

impl Forwarder for WebhookClient {
    fn deliver(
        &self,
        destination: Url,
        payload: ForwardPayload,
    ) -> Pin<Box<dyn Future<Output = Result<ForwardReceipt>> + Send + '_>> {
        Box::pin(self.send(destination, payload))
    }
}

pub mod fake {
    //! Recording forwarder for tests.
    //!
    //! Captures every delivery without network access and can be configured
    //! to fail, so handler behavior can be verified deterministically.

    use std::sync::Arc;

    use tokio::sync::RwLock;

    use super::{
        DeliveryError, Duration, Forwarder, ForwardPayload, ForwardReceipt, Future, Pin, Result,
        Url,
    };

    /// Forwarder double that records deliveries instead of sending them.
    #[derive(Clone, Default)]
    pub struct RecordingForwarder {
        deliveries: Arc<RwLock<Vec<(Url, serde_json::Value)>>>,
        fail_with: Arc<RwLock<Option<DeliveryError>>>,
    }

    impl RecordingForwarder {
        /// Creates a fake whose deliveries all succeed.
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a fake whose deliveries all fail with the given error.
        pub fn failing(error: DeliveryError) -> Self {
            Self {
                deliveries: Arc::new(RwLock::new(Vec::new())),
                fail_with: Arc::new(RwLock::new(Some(error))),
            }
        }

        /// Returns the recorded (destination, body) pairs.
        pub async fn deliveries(&self) -> Vec<(Url, serde_json::Value)> {
            self.deliveries.read().await.clone()
        }

        /// Returns how many deliveries were attempted.
        pub async fn delivery_count(&self) -> usize {
            self.deliveries.read().await.len()
        }
    }

    impl Forwarder for RecordingForwarder {
        fn deliver(
            &self,
            destination: Url,
            payload: ForwardPayload,
        ) -> Pin<Box<dyn Future<Output = Result<ForwardReceipt>> + Send + '_>> {
            let deliveries = self.deliveries.clone();
            let fail_with = self.fail_with.clone();

            Box::pin(async move {
                let body = serde_json::to_value(&payload).expect("payload serializes");
                deliveries.write().await.push((destination, body));

                if let Some(error) = fail_with.read().await.clone() {
                    return Err(error);
                }

                Ok(ForwardReceipt { status_code: 200, duration: Duration::ZERO })
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

    use super::*;

    fn create_test_payload() -> ForwardPayload {
        ForwardPayload { id: UserId::new("7"), data: json!({"note": "hi"}) }
    }

    fn parse_url(raw: &str) -> Url {
        Url::parse(raw).expect("valid test URL")
    }

    #[tokio::test]
    async fn successful_delivery() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/hooks/catch"))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .mount(&mock_server)
            .await;

        let client = WebhookClient::with_defaults().unwrap();
        let destination = parse_url(&format!("{}/hooks/catch", mock_server.uri()));

        let receipt = client.deliver(destination, create_test_payload()).await.unwrap();
        assert_eq!(receipt.status_code, 200);
    }

    #[tokio::test]
    async fn body_carries_id_and_data() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .and(matchers::body_json(json!({"id": "7", "data": {"note": "hi"}})))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = WebhookClient::with_defaults().unwrap();
        let destination = parse_url(&mock_server.uri());

        let result = client.deliver(destination, create_test_payload()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn non_success_status_is_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let client = WebhookClient::with_defaults().unwrap();
        let destination = parse_url(&mock_server.uri());

        let error = client.deliver(destination, create_test_payload()).await.unwrap_err();
        assert!(matches!(error, DeliveryError::ErrorStatus { status: 500 }));
    }

    #[tokio::test]
    async fn client_error_status_is_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = WebhookClient::with_defaults().unwrap();
        let destination = parse_url(&mock_server.uri());

        let error = client.deliver(destination, create_test_payload()).await.unwrap_err();
        assert!(matches!(error, DeliveryError::ErrorStatus { status: 404 }));
    }

    #[tokio::test]
    async fn connection_refused_is_network_error() {
        // Nothing listens on the mock server's port once it is dropped.
        let destination = {
            let mock_server = MockServer::start().await;
            parse_url(&mock_server.uri())
        };

        let client = WebhookClient::with_defaults().unwrap();

        let error = client.deliver(destination, create_test_payload()).await.unwrap_err();
        assert!(matches!(error, DeliveryError::Network { .. }));
    }

    #[tokio::test]
    async fn recording_fake_captures_deliveries() {
        let fake = fake::RecordingForwarder::new();
        let destination = parse_url("https://hooks.example.com/catch");

        fake.deliver(destination.clone(), create_test_payload()).await.unwrap();

        let deliveries = fake.deliveries().await;
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].0, destination);
        assert_eq!(deliveries[0].1, json!({"id": "7", "data": {"note": "hi"}}));
    }

    #[tokio::test]
    async fn recording_fake_reports_configured_failure() {
        let fake = fake::RecordingForwarder::failing(DeliveryError::timeout(30));
        let destination = parse_url("https://hooks.example.com/catch");

        let error = fake.deliver(destination, create_test_payload()).await.unwrap_err();
        assert!(matches!(error, DeliveryError::Timeout { timeout_seconds: 30 }));
        assert_eq!(fake.delivery_count().await, 1);
    }
}
