use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("credentials error: {0}")]
    CredentialsError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CxError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A remote or identifier error; `exit_code` tells scripts its kind.
    #[error("api error: {message}")]
    Api { message: String, exit_code: u8 },

    #[error("{0}")]
    Other(String),
}

impl CxError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CxError::Api { exit_code, .. } => *exit_code,
            _ => 1,
        }
    }
}
