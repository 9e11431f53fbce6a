//! Full configuration validation.
//!
//! Validates numeric ranges and required strings, collecting every
//! problem into a single `ConfigError`.

mod helpers;


use crate::schema::CxConfig;
use cxsession_common::ConfigError;

use helpers::{validate_non_empty, validate_range};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CxConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_non_empty(
        &mut errors,
        "credentials.access_token_env",
        &config.credentials.access_token_env,
    );
    validate_range(
        &mut errors,
        "endpoint.timeout_secs",
        config.endpoint.timeout_secs,
        1,
        600,
    );
    validate_range(
        &mut errors,
        "endpoint.connect_timeout_secs",
        config.endpoint.connect_timeout_secs,
        1,
        120,
    );
    if let Some(ref endpoint) = config.endpoint.api_endpoint {
        validate_non_empty(&mut errors, "endpoint.api_endpoint", endpoint);
    }
    validate_range(
        &mut errors,
        "defaults.page_size",
        config.defaults.page_size,
        1,
        1000,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
