//! Configuration loading and management.
//!
//! Loads configuration from embedded config.toml with environment variable overrides.
//! A [`Config`] is built once and handed to a [`crate::Client`]; it is never
//! mutated afterwards.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use url::Url;

use crate::secure::{Credentials, SecureString};

/// Embedded configuration file content.
const CONFIG_TOML: &str = include_str!("../config.toml");

const PLACEHOLDER_CLIENT_ID: &str = "YOUR_CLIENT_ID";
const PLACEHOLDER_CLIENT_SECRET: &str = "YOUR_CLIENT_SECRET";

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub credentials: Credentials,
    pub application: ApplicationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the Casdoor server, e.g. `https://door.casdoor.com`.
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    /// Organization stamped as `owner` on every write.
    pub organization_name: String,
    pub application_name: String,
    /// Public certificate of the application's signing key.
    #[serde(default)]
    pub certificate: String,
}

impl Config {
    /// Build a configuration from explicit values.
    pub fn new(
        endpoint: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        certificate: impl Into<String>,
        organization_name: impl Into<String>,
        application_name: impl Into<String>,
    ) -> Self {
        let mut config = Self {
            server: ServerConfig {
                endpoint: endpoint.into(),
            },
            credentials: Credentials::new(client_id, SecureString::new(client_secret.into())),
            application: ApplicationConfig {
                organization_name: organization_name.into(),
                application_name: application_name.into(),
                certificate: certificate.into(),
            },
        };
        config.normalize();
        config
    }

    /// Load configuration from embedded config.toml with environment variable overrides.
    pub fn load() -> Result<Self> {
        // Parse embedded config
        let mut config: Config =
            toml::from_str(CONFIG_TOML).context("Failed to parse embedded config.toml")?;

        // Apply environment variable overrides
        if let Ok(endpoint) = env::var("CASDOOR_ENDPOINT") {
            config.server.endpoint = endpoint;
        }

        if let Ok(client_id) = env::var("CASDOOR_CLIENT_ID") {
            config.credentials.client_id = client_id;
        }

        if let Ok(client_secret) = env::var("CASDOOR_CLIENT_SECRET") {
            config.credentials.client_secret = SecureString::new(client_secret);
        }

        if let Ok(certificate) = env::var("CASDOOR_CERTIFICATE") {
            config.application.certificate = certificate;
        }

        if let Ok(organization) = env::var("CASDOOR_ORGANIZATION_NAME") {
            config.application.organization_name = organization;
        }

        if let Ok(application) = env::var("CASDOOR_APPLICATION_NAME") {
            config.application.application_name = application;
        }

        config.normalize();
        config.validate()?;

        Ok(config)
    }

    /// Parse and validate configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content).context("Failed to parse config TOML")?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    fn normalize(&mut self) {
        let trimmed = self.server.endpoint.trim().trim_end_matches('/').to_string();
        self.server.endpoint = trimmed;
    }

    /// Validate that required configuration is present.
    pub fn validate(&self) -> Result<()> {
        if self.server.endpoint.is_empty() {
            anyhow::bail!(
                "Casdoor endpoint not configured. Set CASDOOR_ENDPOINT environment variable \
                 or update config.toml"
            );
        }

        Url::parse(&self.server.endpoint)
            .with_context(|| format!("Invalid Casdoor endpoint: {}", self.server.endpoint))?;

        let client_id = &self.credentials.client_id;
        if client_id.is_empty() || client_id == PLACEHOLDER_CLIENT_ID {
            anyhow::bail!(
                "Casdoor client_id not configured. Set CASDOOR_CLIENT_ID environment variable \
                 or update config.toml"
            );
        }

        let secret = self.credentials.client_secret.as_str();
        if secret.is_empty() || secret == PLACEHOLDER_CLIENT_SECRET {
            anyhow::bail!(
                "Casdoor client_secret not configured. Set CASDOOR_CLIENT_SECRET environment \
                 variable or update config.toml"
            );
        }

        Ok(())
    }

    pub fn endpoint(&self) -> &str {
        &self.server.endpoint
    }

    pub fn client_id(&self) -> &str {
        &self.credentials.client_id
    }

    pub fn client_secret(&self) -> &str {
        self.credentials.client_secret.as_str()
    }

    pub fn organization_name(&self) -> &str {
        &self.application.organization_name
    }

    pub fn application_name(&self) -> &str {
        &self.application.application_name
    }

    pub fn certificate(&self) -> &str {
        &self.application.certificate
    }

    /// Base URL all actions are appended to.
    pub fn api_base_url(&self) -> String {
        format!("{}/api", self.server.endpoint)
    }
}
