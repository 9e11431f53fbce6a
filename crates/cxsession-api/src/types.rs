//! Session entity type records and request payloads.
//!
//! Field names serialize in the camelCase JSON form the remote API uses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ApiError;

/// Whether session entities replace or extend the agent-level entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EntityOverrideMode {
    /// Session entities replace the agent's entities for this entity type.
    #[default]
    #[serde(rename = "ENTITY_OVERRIDE_MODE_OVERRIDE")]
    Override,
    /// Session entities are added to the agent's entities.
    #[serde(rename = "ENTITY_OVERRIDE_MODE_SUPPLEMENT")]
    Supplement,
}

impl EntityOverrideMode {
    /// The literal the remote protocol expects.
    pub fn as_wire_str(self) -> &'static str {
        match self {
            EntityOverrideMode::Override => "ENTITY_OVERRIDE_MODE_OVERRIDE",
            EntityOverrideMode::Supplement => "ENTITY_OVERRIDE_MODE_SUPPLEMENT",
        }
    }
}

impl FromStr for EntityOverrideMode {
    type Err = ApiError;

    /// Accepts `Override` / `Supplement` and their wire literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Override" | "ENTITY_OVERRIDE_MODE_OVERRIDE" => Ok(EntityOverrideMode::Override),
            "Supplement" | "ENTITY_OVERRIDE_MODE_SUPPLEMENT" => {
                Ok(EntityOverrideMode::Supplement)
            }
            other => Err(ApiError::InvalidArgument(format!(
                "unknown entity override mode {other:?}, expected Override or Supplement"
            ))),
        }
    }
}

impl fmt::Display for EntityOverrideMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

/// One entity value and the synonyms that resolve to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub value: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl Entity {
    pub fn new<S: Into<String>>(
        value: impl Into<String>,
        synonyms: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            value: value.into(),
            synonyms: synonyms.into_iter().map(Into::into).collect(),
        }
    }
}

/// A session-scoped override or supplement of a custom entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEntityType {
    /// `.../sessions/<S>/entityTypes/<T>`, optionally environment-scoped.
    pub name: String,
    pub entity_override_mode: EntityOverrideMode,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSessionEntityTypesRequest {
    /// The (possibly environment-scoped) session path.
    pub parent: String,
    pub page_size: Option<u32>,
    pub page_token: Option<String>,
}

/// One page of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSessionEntityTypesPage {
    #[serde(default)]
    pub session_entity_types: Vec<SessionEntityType>,
    /// Empty or absent on the last page.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl ListSessionEntityTypesPage {
    /// The token for the following page, if there is one.
    pub fn next_token(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSessionEntityTypeRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSessionEntityTypeRequest {
    pub parent: String,
    pub session_entity_type: SessionEntityType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSessionEntityTypeRequest {
    pub session_entity_type: SessionEntityType,
    /// camelCase field names to overwrite; empty replaces every field.
    pub update_mask: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteSessionEntityTypeRequest {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_mode_parses_user_strings() {
        assert_eq!(
            "Override".parse::<EntityOverrideMode>().unwrap(),
            EntityOverrideMode::Override
        );
        assert_eq!(
            "Supplement".parse::<EntityOverrideMode>().unwrap(),
            EntityOverrideMode::Supplement
        );
        assert_eq!(
            "ENTITY_OVERRIDE_MODE_SUPPLEMENT"
                .parse::<EntityOverrideMode>()
                .unwrap(),
            EntityOverrideMode::Supplement
        );
    }

    #[test]
    fn override_mode_rejects_unknown() {
        let err = "bogus".parse::<EntityOverrideMode>().unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
        assert!(err.to_string().contains("bogus"));

        // Case matters, as it does for the remote literals.
        assert!("override".parse::<EntityOverrideMode>().is_err());
    }

    #[test]
    fn override_mode_wire_literals() {
        assert_eq!(
            EntityOverrideMode::Override.to_string(),
            "ENTITY_OVERRIDE_MODE_OVERRIDE"
        );
        assert_eq!(
            serde_json::to_value(EntityOverrideMode::Supplement).unwrap(),
            serde_json::json!("ENTITY_OVERRIDE_MODE_SUPPLEMENT")
        );
    }

    #[test]
    fn session_entity_type_serializes_camel_case() {
        let set = SessionEntityType {
            name: "projects/p/locations/global/agents/a/sessions/s/entityTypes/t".into(),
            entity_override_mode: EntityOverrideMode::Override,
            entities: vec![Entity::new("scallions", ["green onions"])],
        };
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "projects/p/locations/global/agents/a/sessions/s/entityTypes/t",
                "entityOverrideMode": "ENTITY_OVERRIDE_MODE_OVERRIDE",
                "entities": [{ "value": "scallions", "synonyms": ["green onions"] }]
            })
        );
    }

    #[test]
    fn session_entity_type_rejects_unspecified_mode() {
        let json = r#"{"name": "n", "entityOverrideMode": "ENTITY_OVERRIDE_MODE_UNSPECIFIED"}"#;
        assert!(serde_json::from_str::<SessionEntityType>(json).is_err());
    }

    #[test]
    fn list_page_tolerates_missing_fields() {
        let page: ListSessionEntityTypesPage = serde_json::from_str("{}").unwrap();
        assert!(page.session_entity_types.is_empty());
        assert_eq!(page.next_token(), None);

        let page: ListSessionEntityTypesPage =
            serde_json::from_str(r#"{"nextPageToken": ""}"#).unwrap();
        assert_eq!(page.next_token(), None);

        let page: ListSessionEntityTypesPage =
            serde_json::from_str(r#"{"nextPageToken": "abc"}"#).unwrap();
        assert_eq!(page.next_token(), Some("abc"));
    }
}
