//! The SessionEntityTypes service.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::client::SessionEntityTypesClient;
use crate::resource::{
    normalize_session_entity_type_id, normalize_session_id, AgentPath, EntityTypePath, SessionPath,
};
use crate::types::{
    CreateSessionEntityTypeRequest, DeleteSessionEntityTypeRequest, Entity, EntityOverrideMode,
    GetSessionEntityTypeRequest, ListSessionEntityTypesRequest, SessionEntityType,
    UpdateSessionEntityTypeRequest,
};
use crate::ApiError;

/// Session entity type operations against one remote client.
pub struct SessionEntityTypes {
    client: Arc<dyn SessionEntityTypesClient>,
    /// Page size requested when listing; `None` leaves it to the server.
    page_size: Option<u32>,
}

impl SessionEntityTypes {
    pub fn new(client: Arc<dyn SessionEntityTypesClient>) -> Self {
        Self {
            client,
            page_size: None,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Mint a fresh session path under `agent_id`. No remote call is made.
    ///
    /// The remote API creates the session on first use.
    pub fn new_session_id(
        agent_id: &str,
        environment_id: Option<&str>,
    ) -> Result<String, ApiError> {
        let agent: AgentPath = agent_id.parse()?;
        normalize_session_id(&agent.new_session().to_string(), environment_id)
    }

    /// Build an unsent session entity type. No remote call is made.
    ///
    /// `entities` maps each entity value to its synonyms and is kept in
    /// iteration order. A value given twice fails with `InvalidArgument`.
    /// `entity_id` is the agent-level entity type being
    /// overridden or supplemented; only its trailing segment is used.
    pub fn build_session_entity_type<I, K, V, S>(
        session_id: &str,
        entity_id: &str,
        entities: I,
        environment_id: Option<&str>,
        entity_override_mode: EntityOverrideMode,
    ) -> Result<SessionEntityType, ApiError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parent = normalize_session_id(session_id, environment_id)?;
        let entity_type: EntityTypePath = entity_id.parse()?;

        let entities: Vec<Entity> = entities
            .into_iter()
            .map(|(value, synonyms)| Entity::new(value, synonyms))
            .collect();
        let mut seen = HashSet::new();
        if let Some(dup) = entities.iter().find(|e| !seen.insert(e.value.as_str())) {
            return Err(ApiError::InvalidArgument(format!(
                "duplicate entity value {:?}",
                dup.value
            )));
        }

        Ok(SessionEntityType {
            name: format!("{parent}/entityTypes/{}", entity_type.entity),
            entity_override_mode,
            entities,
        })
    }

    /// List every session entity type active in the session, across all pages.
    pub async fn list_session_entity_types(
        &self,
        session_id: &str,
        environment_id: Option<&str>,
    ) -> Result<Vec<SessionEntityType>, ApiError> {
        let mut request = ListSessionEntityTypesRequest {
            parent: normalize_session_id(session_id, environment_id)?,
            page_size: self.page_size,
            page_token: None,
        };

        let mut session_entity_types = Vec::new();
        let mut seen_tokens = HashSet::new();
        let mut pages = 0u32;
        loop {
            let page = self.client.list_session_entity_types(&request).await?;
            pages += 1;

            let next = page.next_token().map(String::from);
            session_entity_types.extend(page.session_entity_types);

            match next {
                Some(token) if !seen_tokens.insert(token.clone()) => {
                    warn!(parent = %request.parent, %token, "page token repeated, stopping");
                    break;
                }
                Some(token) => request.page_token = Some(token),
                None => break,
            }
        }

        debug!(
            parent = %request.parent,
            pages,
            count = session_entity_types.len(),
            "listed session entity types"
        );
        Ok(session_entity_types)
    }

    pub async fn get_session_entity_type(
        &self,
        session_entity_type_id: &str,
        environment_id: Option<&str>,
    ) -> Result<SessionEntityType, ApiError> {
        let request = GetSessionEntityTypeRequest {
            name: normalize_session_entity_type_id(session_entity_type_id, environment_id)?,
        };
        self.client.get_session_entity_type(&request).await
    }

    /// Create `session_entity_type` under `session_id`.
    ///
    /// `session_id` is sent as given; bind it to an environment first if
    /// needed. Use [`Self::build_session_entity_type`] to make the payload.
    pub async fn create_session_entity_type(
        &self,
        session_id: &str,
        session_entity_type: SessionEntityType,
    ) -> Result<SessionEntityType, ApiError> {
        session_id.parse::<SessionPath>()?;

        let request = CreateSessionEntityTypeRequest {
            parent: session_id.to_string(),
            session_entity_type,
        };
        self.client.create_session_entity_type(&request).await
    }

    /// Overwrite the fields named in `update_mask` (all fields when empty).
    ///
    /// The record's `name` is normalized for `environment_id` first.
    pub async fn update_session_entity_type(
        &self,
        mut session_entity_type: SessionEntityType,
        update_mask: &[&str],
        environment_id: Option<&str>,
    ) -> Result<SessionEntityType, ApiError> {
        session_entity_type.name =
            normalize_session_entity_type_id(&session_entity_type.name, environment_id)?;

        let request = UpdateSessionEntityTypeRequest {
            session_entity_type,
            update_mask: update_mask.iter().map(|f| f.to_string()).collect(),
        };
        self.client.update_session_entity_type(&request).await
    }

    pub async fn delete_session_entity_type(
        &self,
        session_entity_type_id: &str,
        environment_id: Option<&str>,
    ) -> Result<(), ApiError> {
        let request = DeleteSessionEntityTypeRequest {
            name: normalize_session_entity_type_id(session_entity_type_id, environment_id)?,
        };
        self.client.delete_session_entity_type(&request).await
    }
}
