//! Hierarchical resource identifiers.
//!
//! Every remote resource is addressed by a slash-delimited path such as
//! `projects/<P>/locations/<L>/agents/<A>/sessions/<S>`. Sessions may
//! additionally be scoped to a deployment environment
//! (`.../agents/<A>/environments/<E>/sessions/<S>`); without one the
//! remote API serves the implicit draft environment.

mod endpoint;
mod normalize;
mod path;

#[cfg(test)]
mod tests;

pub use endpoint::{api_host_for_location, location_of, GLOBAL_API_HOST};
pub use normalize::{
    merge_session_entity_id_and_env_id, merge_session_id_and_env_id,
    normalize_session_entity_type_id, normalize_session_id,
};
pub use path::{AgentPath, EntityTypePath, EnvironmentPath, SessionEntityTypePath, SessionPath};
