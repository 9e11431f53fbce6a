//! REST client struct, URL building, and error mapping.

use reqwest::StatusCode;

use crate::resource::{api_host_for_location, location_of};
use crate::ApiError;

use super::config::RestConfig;

pub(crate) const API_VERSION: &str = "v3beta1";

/// Dialogflow CX REST client.
pub struct RestClient {
    pub(crate) config: RestConfig,
    pub(crate) http: reqwest::Client,
}

impl RestClient {
    pub fn new(config: RestConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    /// Scheme and host serving `resource_name`.
    pub(crate) fn base_url(&self, resource_name: &str) -> String {
        match self.config.api_endpoint {
            Some(ref endpoint) => {
                let endpoint = endpoint.trim_end_matches('/');
                if endpoint.starts_with("https://") || endpoint.starts_with("http://") {
                    endpoint.to_string()
                } else {
                    format!("https://{endpoint}")
                }
            }
            None => {
                let location = location_of(resource_name).unwrap_or("global");
                format!("https://{}", api_host_for_location(location))
            }
        }
    }

    /// Full URL of `resource_name`, with an optional collection suffix
    /// such as `/entityTypes`.
    pub(crate) fn resource_url(&self, resource_name: &str, suffix: &str) -> String {
        format!(
            "{}/{API_VERSION}/{resource_name}{suffix}",
            self.base_url(resource_name)
        )
    }
}

/// Map a non-success HTTP response onto the API error kinds.
///
/// Google APIs return `{"error": {"message": ...}}`; anything else is
/// reported as a truncated body.
pub(crate) fn error_from_status(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.chars().take(200).collect());

    match status {
        StatusCode::BAD_REQUEST => ApiError::InvalidArgument(message),
        StatusCode::UNAUTHORIZED => ApiError::Unauthenticated(message),
        StatusCode::FORBIDDEN => ApiError::PermissionDenied(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::CONFLICT => ApiError::AlreadyExists(message),
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
        _ => ApiError::Api {
            status: status.as_u16(),
            message,
        },
    }
}
