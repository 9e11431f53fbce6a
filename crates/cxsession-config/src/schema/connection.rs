//! Credentials and endpoint configuration.

use std::fmt;

use cxsession_common::ConfigError;
use serde::{Deserialize, Serialize};

/// Where the bearer token for the remote API comes from.
///
/// Token acquisition (service accounts, OAuth flows) happens outside
/// cxsession; this only locates an already-minted access token.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Inline access token. Never written back out.
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    /// Environment variable consulted when `access_token` is unset.
    pub access_token_env: String,
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("access_token_env", &self.access_token_env)
            .finish()
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            access_token_env: "GOOGLE_OAUTH_ACCESS_TOKEN".into(),
        }
    }
}

impl CredentialsConfig {
    /// Resolve the access token: inline value first, then the env var.
    pub fn resolve_token(&self) -> Result<String, ConfigError> {
        if let Some(token) = self.access_token.as_deref().filter(|t| !t.trim().is_empty()) {
            return Ok(token.trim().to_string());
        }

        match std::env::var(&self.access_token_env) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(ConfigError::CredentialsError(format!(
                "no access token configured. Set credentials.access_token or ${}",
                self.access_token_env
            ))),
        }
    }
}

/// Remote endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Fixed API host, e.g. `https://dialogflow.googleapis.com`.
    /// When unset the host is derived from each resource's location.
    pub api_endpoint: Option<String>,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u32,
    /// Connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u32,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            api_endpoint: None,
            timeout_secs: 60,
            connect_timeout_secs: 10,
        }
    }
}
