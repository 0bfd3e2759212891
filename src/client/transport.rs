//! Pluggable HTTP transport.
//!
//! The client never talks to the network directly; it hands a fully prepared
//! [`reqwest::Request`] to an [`HttpTransport`]. `reqwest::Client` is the
//! default implementation, and tests or instrumented callers can substitute
//! their own.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Request;

use crate::error::{SdkError, SdkResult};

/// HTTP request timeout.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP connection timeout.
pub const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Status and body of a completed round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Executes a prepared request and returns the raw response.
///
/// Implementations must be safe for concurrent use; one transport is shared
/// by every call made through a client.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: Request) -> SdkResult<TransportResponse>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn execute(&self, request: Request) -> SdkResult<TransportResponse> {
        let response = reqwest::Client::execute(self, request)
            .await
            .map_err(SdkError::from)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(SdkError::from)?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Build the default pooled `reqwest` client.
pub fn default_http_client() -> SdkResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .connect_timeout(HTTP_CONNECT_TIMEOUT)
        .build()
        .map_err(SdkError::from)
}
