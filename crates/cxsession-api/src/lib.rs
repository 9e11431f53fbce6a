//! Session entity type operations for Dialogflow CX agents.
//!
//! Provides:
//! - Resource path parsing and environment-aware path normalization
//! - Typed request and record models with the exact wire enums
//! - A `SessionEntityTypesClient` seam over the remote API, with a
//!   `reqwest`-backed REST implementation
//! - The `SessionEntityTypes` service: build, list, get, create,
//!   update and delete

pub mod client;
pub mod resource;
pub mod rest;
pub mod session_entity_types;
pub mod types;

pub use client::SessionEntityTypesClient;
pub use resource::{
    AgentPath, EntityTypePath, EnvironmentPath, SessionEntityTypePath, SessionPath,
};
pub use rest::{RestClient, RestConfig};
pub use session_entity_types::SessionEntityTypes;
pub use types::{Entity, EntityOverrideMode, SessionEntityType};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("malformed {kind} identifier: {value:?}")]
    MalformedIdentifier { kind: &'static str, value: String },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("already exists: {0}")]
    AlreadyExists(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),
    #[error("rate limited")]
    RateLimited,
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
}

impl ApiError {
    /// Process exit status distinguishing each kind of failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ApiError::MalformedIdentifier { .. } | ApiError::InvalidArgument(_) => 2,
            ApiError::NotFound(_) => 3,
            ApiError::AlreadyExists(_) => 4,
            ApiError::PermissionDenied(_) | ApiError::Unauthenticated(_) => 5,
            ApiError::RateLimited => 6,
            ApiError::Network(_) => 7,
            ApiError::Parse(_) | ApiError::Api { .. } => 1,
        }
    }
}

impl From<ApiError> for cxsession_common::CxError {
    fn from(err: ApiError) -> Self {
        cxsession_common::CxError::Api {
            message: err.to_string(),
            exit_code: err.exit_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cxsession_common::CxError;

    #[test]
    fn conversion_keeps_kind_as_exit_code() {
        let cases = [
            (ApiError::InvalidArgument("mode".into()), 2),
            (ApiError::NotFound("x".into()), 3),
            (ApiError::AlreadyExists("x".into()), 4),
            (ApiError::Unauthenticated("x".into()), 5),
            (ApiError::RateLimited, 6),
            (ApiError::Network("reset".into()), 7),
            (
                ApiError::Api {
                    status: 500,
                    message: "boom".into(),
                },
                1,
            ),
        ];
        for (err, code) in cases {
            let message = err.to_string();
            let cx: CxError = err.into();
            assert_eq!(cx.exit_code(), code, "{message}");
            assert_eq!(cx.to_string(), format!("api error: {message}"));
        }
    }
}
