//! HTTP transport configuration
//!
//! Builds the `reqwest` client shared by every call a [`UnifiClient`] makes:
//! a cookie jar for the session and an optional TLS-verification bypass for
//! controllers with self-signed certificates.
//!
//! [`UnifiClient`]: crate::client::UnifiClient

use crate::Result;
use reqwest::Client;
use reqwest::cookie::Jar;
use std::sync::Arc;

/// User agent sent with every controller request
pub const USER_AGENT: &str = concat!("unifi-guest/", env!("CARGO_PKG_VERSION"));

/// Transport options for a controller connection
#[derive(Debug, Clone, Default)]
pub struct TransportSpec {
    /// Skip TLS certificate verification
    pub insecure: bool,
}

impl TransportSpec {
    /// Create new transport specification
    pub fn new() -> Self {
        Self::default()
    }

    /// Set TLS verification bypass
    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Build the HTTP client, storing cookies in `jar`
    ///
    /// No request or connect timeout is configured; a stalled controller
    /// blocks the caller until the connection is torn down.
    pub fn build_client(&self, jar: Arc<Jar>) -> Result<Client> {
        let mut client_builder = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_provider(jar);

        if self.insecure {
            tracing::debug!("TLS certificate verification disabled");
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        client_builder.build().map_err(|e| {
            crate::Error::config("transport", format!("Failed to create HTTP client: {}", e).as_str())
        })
    }
}
