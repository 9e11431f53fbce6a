//! Per-project defaults applied when a command omits them.

use serde::{Deserialize, Serialize};

/// Defaults used by the CLI when arguments are omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// `projects/<P>/locations/<L>/agents/<A>`, used to mint new sessions.
    pub agent_id: Option<String>,
    /// `projects/<P>/locations/<L>/agents/<A>/environments/<E>`.
    /// Unset means the implicit draft environment.
    pub environment_id: Option<String>,
    /// Page size requested when listing (valid range: 1-1000).
    pub page_size: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            agent_id: None,
            environment_id: None,
            page_size: 100,
        }
    }
}
