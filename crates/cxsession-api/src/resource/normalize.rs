//! Environment-aware path normalization.
//!
//! Without an environment the base identifier is returned unchanged and
//! the remote API serves the draft environment. With one, its
//! `environments/<E>` segment is spliced in between the agent and the
//! session.

use crate::ApiError;

use super::path::{EnvironmentPath, SessionEntityTypePath, SessionPath};

/// Bind `session` to `environment`.
///
/// Project, location, agent and session all come from `session`; only the
/// environment segment is taken from `environment`.
pub fn merge_session_id_and_env_id(
    session: &SessionPath,
    environment: &EnvironmentPath,
) -> SessionPath {
    SessionPath {
        agent: session.agent.clone(),
        environment: Some(environment.environment.clone()),
        session: session.session.clone(),
    }
}

/// Bind a session entity type to `environment`.
///
/// Unlike [`merge_session_id_and_env_id`], project, location and agent come
/// from `environment`. Session and entity still come from
/// `session_entity_type`, since an environment path carries neither.
pub fn merge_session_entity_id_and_env_id(
    session_entity_type: &SessionEntityTypePath,
    environment: &EnvironmentPath,
) -> SessionEntityTypePath {
    SessionEntityTypePath {
        session: SessionPath {
            agent: environment.agent.clone(),
            environment: Some(environment.environment.clone()),
            session: session_entity_type.session.session.clone(),
        },
        entity: session_entity_type.entity.clone(),
    }
}

/// An empty environment id means draft, same as no id at all.
fn non_empty(environment_id: Option<&str>) -> Option<&str> {
    environment_id.filter(|id| !id.is_empty())
}

/// Validate `session_id` and bind it to `environment_id` when one is given.
pub fn normalize_session_id(
    session_id: &str,
    environment_id: Option<&str>,
) -> Result<String, ApiError> {
    let session: SessionPath = session_id.parse()?;
    match non_empty(environment_id) {
        None => Ok(session_id.to_string()),
        Some(env) => {
            let environment: EnvironmentPath = env.parse()?;
            Ok(merge_session_id_and_env_id(&session, &environment).to_string())
        }
    }
}

/// Validate `session_entity_type_id` and bind it to `environment_id` when
/// one is given.
pub fn normalize_session_entity_type_id(
    session_entity_type_id: &str,
    environment_id: Option<&str>,
) -> Result<String, ApiError> {
    let session_entity_type: SessionEntityTypePath = session_entity_type_id.parse()?;
    match non_empty(environment_id) {
        None => Ok(session_entity_type_id.to_string()),
        Some(env) => {
            let environment: EnvironmentPath = env.parse()?;
            Ok(merge_session_entity_id_and_env_id(&session_entity_type, &environment).to_string())
        }
    }
}
