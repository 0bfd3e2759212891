//! Recording transport used by the unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use http_body_util::BodyExt;
use reqwest::header::HeaderMap;
use reqwest::{Method, Request};
use serde_json::Value;
use url::Url;

use super::transport::{HttpTransport, TransportResponse};
use super::Client;
use crate::config::Config;
use crate::error::{SdkError, SdkResult};

pub(crate) const TEST_ORG: &str = "configured-org";

/// A request as the transport saw it, with the body fully collected.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn query(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    pub fn query_keys(&self) -> Vec<String> {
        self.url.query_pairs().map(|(k, _)| k.into_owned()).collect()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    pub fn body_json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

/// Replays canned responses in order and records every request.
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<SdkResult<TransportResponse>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new(responses: Vec<SdkResult<TransportResponse>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Each value is served as a `200` JSON body.
    pub fn with_json(bodies: Vec<Value>) -> Self {
        Self::new(
            bodies
                .into_iter()
                .map(|body| {
                    Ok(TransportResponse {
                        status: 200,
                        body: serde_json::to_vec(&body).unwrap(),
                    })
                })
                .collect(),
        )
    }

    pub fn with_raw(status: u16, body: &[u8]) -> Self {
        Self::new(vec![Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })])
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, mut request: Request) -> SdkResult<TransportResponse> {
        let method = request.method().clone();
        let url = request.url().clone();
        let headers = request.headers().clone();
        let body = match request.body_mut().take() {
            Some(body) => body
                .collect()
                .await
                .map_err(|e| SdkError::Transport(e.to_string()))?
                .to_bytes()
                .to_vec(),
            None => Vec::new(),
        };

        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url,
            headers,
            body,
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SdkError::Transport("no canned response left".into())))
    }
}

pub(crate) fn test_config() -> Config {
    Config::new(
        "https://door.example.com",
        "client-id",
        "client-secret",
        "",
        TEST_ORG,
        "app-test",
    )
}

pub(crate) fn mock_client(transport: MockTransport) -> (Client, Arc<MockTransport>) {
    let transport = Arc::new(transport);
    let client = Client::with_transport(test_config(), transport.clone()).unwrap();
    (client, transport)
}
