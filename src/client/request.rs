//! The request pipeline: build a URL and body, sign, send, check the envelope.

use std::collections::BTreeMap;

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use serde::Serialize;
use tracing::{debug, warn};

use super::response::Response;
use super::Client;
use crate::error::{SdkError, SdkResult};

/// Content type of plain (non-form) POST bodies.
pub const TEXT_PLAIN: &str = "text/plain;charset=UTF-8";

/// Name of the single multipart field used for uploads.
const FILE_FIELD: &str = "file";

impl Client {
    /// `<endpoint>/api/<action>?<query>`, with the pairs url-encoded in the given order.
    pub fn get_url(&self, action: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}/{}", self.config.api_base_url(), action);
        if !query.is_empty() {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query)
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }
        url
    }

    /// Authenticated GET returning the raw body.
    pub async fn do_get_bytes_raw(&self, url: &str) -> SdkResult<Vec<u8>> {
        debug!("GET {}", url);
        let builder = self.http_client.get(url);
        self.send(builder).await
    }

    /// Authenticated GET returning the checked envelope.
    pub async fn do_get_response(&self, url: &str) -> SdkResult<Response> {
        let body = self.do_get_bytes_raw(url).await?;
        decode_envelope(&body)
    }

    /// Authenticated GET returning the envelope's `data` as JSON bytes.
    pub async fn do_get_bytes(&self, url: &str) -> SdkResult<Vec<u8>> {
        self.do_get_response(url).await?.data_bytes()
    }

    /// POST `body` to `action`.
    ///
    /// - `is_form && is_file`: one multipart part named `file` with the raw bytes.
    /// - `is_form`: `body` must be a flat JSON object of strings; sent form-urlencoded.
    /// - otherwise: `body` is sent verbatim as `text/plain`.
    pub async fn do_post(
        &self,
        action: &str,
        query: &[(&str, &str)],
        body: &[u8],
        is_form: bool,
        is_file: bool,
    ) -> SdkResult<Response> {
        let url = self.get_url(action, query);
        debug!(action, is_form, is_file, "POST {}", url);

        let builder = self.http_client.post(&url);
        let builder = match (is_form, is_file) {
            (true, true) => {
                let part = Part::bytes(body.to_vec())
                    .file_name(FILE_FIELD)
                    .mime_str("application/octet-stream")?;
                builder.multipart(Form::new().part(FILE_FIELD, part))
            }
            (true, false) => {
                let params: BTreeMap<String, String> = serde_json::from_slice(body)
                    .map_err(|e| SdkError::Decode(format!("form body is not a flat string map: {}", e)))?;
                builder.form(&params)
            }
            (false, _) => builder.header(CONTENT_TYPE, TEXT_PLAIN).body(body.to_vec()),
        };

        let resp_body = self.send(builder).await?;
        decode_envelope(&resp_body)
    }

    /// Authenticated POST of an already encoded body. An empty content type means `text/plain`.
    pub async fn do_post_bytes_raw(
        &self,
        url: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> SdkResult<Vec<u8>> {
        let content_type = if content_type.is_empty() {
            TEXT_PLAIN
        } else {
            content_type
        };

        debug!("POST {} ({})", url, content_type);
        let builder = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(body);
        self.send(builder).await
    }

    /// POST `entity` as JSON to `action`, addressed by `id`, optionally restricted to `columns`.
    ///
    /// Returns the envelope and whether the server reported a changed row.
    pub(crate) async fn post_entity<T: Serialize>(
        &self,
        action: &str,
        id: &str,
        entity: &T,
        columns: &[&str],
    ) -> SdkResult<(Response, bool)> {
        let columns = columns.join(",");
        let mut query = vec![("id", id)];
        if !columns.is_empty() {
            query.push(("columns", columns.as_str()));
        }

        let body = serde_json::to_vec(entity)?;
        let response = self.do_post(action, &query, &body, false, false).await?;
        let affected = response.is_affected();
        if !affected {
            debug!(action, id, "request succeeded but no row was affected");
        }

        Ok((response, affected))
    }

    /// Attach credentials, hand the request to the transport, return the body.
    async fn send(&self, builder: RequestBuilder) -> SdkResult<Vec<u8>> {
        let request = builder
            .basic_auth(self.config.client_id(), Some(self.config.client_secret()))
            .build()?;

        let response = self.transport.execute(request).await?;
        debug!(status = response.status, bytes = response.body.len(), "response received");
        Ok(response.body)
    }
}

/// Decode a body into an envelope and reject non-`ok` statuses.
fn decode_envelope(body: &[u8]) -> SdkResult<Response> {
    let response = Response::from_slice(body).inspect_err(|e| {
        warn!("Failed to decode Casdoor response: {}", e);
    })?;

    response.into_result().inspect_err(|e| {
        warn!("Casdoor request failed: {}", e);
    })
}
