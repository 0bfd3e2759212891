//! Secure data wrappers that are zeroized on drop.
//!
//! The client secret is kept in a [`SecureString`] so it is cleared from
//! memory once the owning configuration goes away.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secure string wrapper that zeroizes its contents on drop.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop, Deserialize)]
#[serde(transparent)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SecureString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecureString {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Application credentials sent as HTTP Basic auth on every request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    /// Application client id (the Basic auth user name).
    pub client_id: String,

    /// Application client secret (the Basic auth password).
    pub client_secret: SecureString,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<SecureString>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl Zeroize for Credentials {
    fn zeroize(&mut self) {
        self.client_id.zeroize();
        self.client_secret.zeroize();
    }
}

impl Drop for Credentials {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Non-secret view of the credentials, safe to log or persist.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialsSummary {
    pub client_id: String,
    pub has_secret: bool,
}

impl From<&Credentials> for CredentialsSummary {
    fn from(c: &Credentials) -> Self {
        Self {
            client_id: c.client_id.clone(),
            has_secret: !c.client_secret.is_empty(),
        }
    }
}
