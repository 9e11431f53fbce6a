//! Configuration schema types for cxsession.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod connection;
mod defaults;
mod system;

pub use connection::*;
pub use defaults::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for cxsession.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CxConfig {
    pub credentials: CredentialsConfig,
    pub endpoint: EndpointConfig,
    pub defaults: DefaultsConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_credentials_read_token_from_env() {
        let config = CxConfig::default();
        assert!(config.credentials.access_token.is_none());
        assert_eq!(config.credentials.access_token_env, "GOOGLE_OAUTH_ACCESS_TOKEN");
    }

    #[test]
    fn default_endpoint_is_region_derived() {
        let config = CxConfig::default();
        assert!(config.endpoint.api_endpoint.is_none());
        assert_eq!(config.endpoint.timeout_secs, 60);
        assert_eq!(config.endpoint.connect_timeout_secs, 10);
    }

    #[test]
    fn default_defaults_are_empty() {
        let config = CxConfig::default();
        assert!(config.defaults.agent_id.is_none());
        assert!(config.defaults.environment_id.is_none());
        assert_eq!(config.defaults.page_size, 100);
    }

    #[test]
    fn default_logging_is_info() {
        let config = CxConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: CxConfig = toml::from_str(
            r#"
[defaults]
agent_id = "projects/p/locations/global/agents/a"
"#,
        )
        .unwrap();
        assert_eq!(
            config.defaults.agent_id.as_deref(),
            Some("projects/p/locations/global/agents/a")
        );
        assert_eq!(config.defaults.page_size, 100);
        assert_eq!(config.endpoint.timeout_secs, 60);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: CxConfig = toml::from_str("[logging]\nlevel = \"DEBUG\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.as_directive(), "debug");
    }
}
