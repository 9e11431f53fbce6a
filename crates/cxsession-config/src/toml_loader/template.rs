//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# cxsession configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[credentials]
# access_token = ""                          # prefer the env var below
# access_token_env = "GOOGLE_OAUTH_ACCESS_TOKEN"

[endpoint]
# api_endpoint = "https://dialogflow.googleapis.com"   # unset = derived from location
# timeout_secs = 60          # 1-600
# connect_timeout_secs = 10  # 1-120

[defaults]
# agent_id = "projects/<project>/locations/<location>/agents/<agent>"
# environment_id = "projects/<project>/locations/<location>/agents/<agent>/environments/<environment>"
# page_size = 100            # 1-1000

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
