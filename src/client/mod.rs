//! Casdoor API client.
//!
//! A [`Client`] owns its configuration and transport, so several
//! independently configured clients can live side by side. Every call is a
//! single authenticated round trip whose JSON envelope is checked before any
//! payload is handed back.

pub mod request;
pub mod response;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::error::{SdkError, SdkResult};
use crate::secure::CredentialsSummary;

pub use response::Response;
pub use transport::{HttpTransport, TransportResponse};

/// Client for the Casdoor HTTP API.
#[derive(Clone)]
pub struct Client {
    config: Arc<Config>,
    /// Used only to assemble requests; execution goes through `transport`.
    http_client: reqwest::Client,
    transport: Arc<dyn HttpTransport>,
}

impl Client {
    /// Create a client that executes requests with the default pooled `reqwest` client.
    pub fn new(config: Config) -> SdkResult<Self> {
        let http_client = transport::default_http_client()?;
        let transport: Arc<dyn HttpTransport> = Arc::new(http_client.clone());
        Self::build(config, http_client, transport)
    }

    /// Create a client that executes requests with a caller-supplied transport.
    pub fn with_transport(config: Config, transport: Arc<dyn HttpTransport>) -> SdkResult<Self> {
        let http_client = transport::default_http_client()?;
        Self::build(config, http_client, transport)
    }

    fn build(
        config: Config,
        http_client: reqwest::Client,
        transport: Arc<dyn HttpTransport>,
    ) -> SdkResult<Self> {
        config
            .validate()
            .map_err(|e| SdkError::Config(e.to_string()))?;

        debug!(
            endpoint = %config.endpoint(),
            organization = %config.organization_name(),
            credentials = ?CredentialsSummary::from(&config.credentials),
            "Casdoor client created"
        );

        Ok(Self {
            config: Arc::new(config),
            http_client,
            transport,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
