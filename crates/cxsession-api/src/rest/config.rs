//! REST client configuration.

use std::fmt;
use std::time::Duration;

/// REST client configuration.
///
/// The access token is held as an opaque handle and never printed.
#[derive(Clone)]
pub struct RestConfig {
    pub access_token: String,
    /// Fixed base URL, e.g. `https://dialogflow.googleapis.com`.
    /// `None` derives the host from each resource's location.
    pub api_endpoint: Option<String>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl fmt::Debug for RestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestConfig")
            .field("access_token", &"[REDACTED]")
            .field("api_endpoint", &self.api_endpoint)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl RestConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            api_endpoint: None,
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}
