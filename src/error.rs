//! Error types for the Casdoor client.
//!
//! Uses `thiserror` for library-style errors with automatic `Display` and `Error` implementations.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type SdkResult<T> = Result<T, SdkError>;

/// Every failure a request round trip can produce.
///
/// Failures are terminal for the call that produced them; nothing here is
/// retried or suppressed.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Building the request or talking to the server failed.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The body was not a valid envelope, or a payload could not be
    /// (re)serialized.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The server answered with `status != "ok"`. Displays the remote `msg` verbatim.
    #[error("{0}")]
    Remote(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

impl SdkError {
    /// Returns a user-friendly message for display.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Transport(_) => "Network error. Check your connection.",
            Self::Decode(_) => "Unexpected response from Casdoor. Please try again.",
            Self::Remote(msg) => msg.as_str(),
            Self::Config(_) => "Configuration error. Please check settings.",
        }
    }

    /// Returns true if the server itself rejected the request.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}
