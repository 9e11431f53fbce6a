//! The remote collaborator seam.
//!
//! Endpoint selection, authentication and transport live behind this
//! trait. Implementations return remote errors as-is and never retry.

use async_trait::async_trait;

use crate::types::{
    CreateSessionEntityTypeRequest, DeleteSessionEntityTypeRequest, GetSessionEntityTypeRequest,
    ListSessionEntityTypesPage, ListSessionEntityTypesRequest, SessionEntityType,
    UpdateSessionEntityTypeRequest,
};
use crate::ApiError;

#[async_trait]
pub trait SessionEntityTypesClient: Send + Sync {
    /// Fetch a single page. Callers follow `next_page_token` themselves.
    async fn list_session_entity_types(
        &self,
        request: &ListSessionEntityTypesRequest,
    ) -> Result<ListSessionEntityTypesPage, ApiError>;

    async fn get_session_entity_type(
        &self,
        request: &GetSessionEntityTypeRequest,
    ) -> Result<SessionEntityType, ApiError>;

    async fn create_session_entity_type(
        &self,
        request: &CreateSessionEntityTypeRequest,
    ) -> Result<SessionEntityType, ApiError>;

    async fn update_session_entity_type(
        &self,
        request: &UpdateSessionEntityTypeRequest,
    ) -> Result<SessionEntityType, ApiError>;

    async fn delete_session_entity_type(
        &self,
        request: &DeleteSessionEntityTypeRequest,
    ) -> Result<(), ApiError>;
}
