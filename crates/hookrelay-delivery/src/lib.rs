//! Outbound webhook forwarding for the hookrelay service.
//!
//! This crate implements the single outbound collaborator the relay has:
//! an HTTP client that carries a `{id, data}` JSON body to the configured
//! destination. One inbound request maps to at most one delivery attempt;
//! there is no retry, backoff, or queuing. The calling request does not
//! complete until the attempt resolves, success or failure.
//!
//! The [`client::Forwarder`] trait keeps the collaborator swappable, so
//! tests exercise the HTTP surface against a recording fake instead of the
//! network.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod error;

pub use client::{ClientConfig, ForwardPayload, ForwardReceipt, Forwarder, WebhookClient};
pub use error::{DeliveryError, Result};

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
