//! Hookrelay webhook relay service.
//!
//! Main entry point. Loads configuration, initializes structured logging,
//! wires the shared store and outbound client, and runs the HTTP server
//! until a shutdown signal arrives.

use std::sync::Arc;

use anyhow::{Context, Result};
use hookrelay_api::{start_server, AppState, Config};
use hookrelay_core::store::MemoryStore;
use hookrelay_delivery::client::WebhookClient;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    init_tracing(&config.rust_log);

    info!("Starting hookrelay service");
    info!(
        host = %config.host,
        port = config.port,
        webhook_configured = config.zapier_webhook_url.is_some(),
        "Configuration loaded"
    );

    let addr = config.parse_server_addr()?;

    // Store lives for the process; id "0" answers fetches out of the box.
    let store = Arc::new(MemoryStore::with_demo_user());
    let client =
        WebhookClient::new(config.to_client_config()).context("failed to build webhook client")?;
    let state = AppState::new(store, Arc::new(client), config);

    start_server(state, addr).await.context("server failed")?;

    info!("hookrelay shutdown complete");
    Ok(())
}

/// Initializes tracing with environment-based configuration.
///
/// `RUST_LOG` from the environment wins; the configured level is the
/// fallback.
fn init_tracing(configured_level: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured_level))
        .or_else(|_| EnvFilter::try_new("info"))
        .expect("default log filter is valid");

    let fmt_layer = fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
