//! The uniform `{status, msg, data, data2}` envelope every endpoint returns.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SdkError, SdkResult};

/// Status value of a successful envelope.
pub const STATUS_OK: &str = "ok";

/// `data` value mutation endpoints return when a row was changed.
pub const AFFECTED: &str = "Affected";

/// Response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: String,

    /// Human readable error text, only set on failure.
    #[serde(default)]
    pub msg: String,

    #[serde(default)]
    pub data: Value,

    #[serde(default)]
    pub data2: Value,
}

impl Response {
    /// Decode an envelope from a raw body.
    pub fn from_slice(body: &[u8]) -> SdkResult<Self> {
        serde_json::from_slice(body)
            .map_err(|e| SdkError::Decode(format!("invalid response envelope: {}", e)))
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Turn a non-`ok` envelope into [`SdkError::Remote`] carrying `msg` unchanged.
    pub fn into_result(self) -> SdkResult<Self> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(SdkError::Remote(self.msg))
        }
    }

    /// True only when `data` is exactly the string `"Affected"`.
    ///
    /// Any other payload, including non-string ones, counts as unaffected.
    pub fn is_affected(&self) -> bool {
        self.data.as_str() == Some(AFFECTED)
    }

    /// `data` re-serialized as JSON bytes.
    pub fn data_bytes(&self) -> SdkResult<Vec<u8>> {
        serde_json::to_vec(&self.data)
            .map_err(|e| SdkError::Decode(format!("failed to serialize data: {}", e)))
    }

    /// Decode `data` into a caller-chosen type.
    pub fn data_as<T: DeserializeOwned>(&self) -> SdkResult<T> {
        T::deserialize(&self.data)
            .map_err(|e| SdkError::Decode(format!("unexpected data shape: {}", e)))
    }

    /// Decode `data2` into a caller-chosen type.
    pub fn data2_as<T: DeserializeOwned>(&self) -> SdkResult<T> {
        T::deserialize(&self.data2)
            .map_err(|e| SdkError::Decode(format!("unexpected data2 shape: {}", e)))
    }
}
