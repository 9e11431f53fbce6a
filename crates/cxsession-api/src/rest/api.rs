//! SessionEntityTypesClient trait implementation for RestClient.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::SessionEntityTypesClient;
use crate::types::{
    CreateSessionEntityTypeRequest, DeleteSessionEntityTypeRequest, GetSessionEntityTypeRequest,
    ListSessionEntityTypesPage, ListSessionEntityTypesRequest, SessionEntityType,
    UpdateSessionEntityTypeRequest,
};
use crate::ApiError;

use super::client::{error_from_status, RestClient};

fn network_error(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Pass successful responses through; turn the rest into `ApiError`s.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    Err(error_from_status(status, &text))
}

async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[async_trait]
impl SessionEntityTypesClient for RestClient {
    async fn list_session_entity_types(
        &self,
        request: &ListSessionEntityTypesRequest,
    ) -> Result<ListSessionEntityTypesPage, ApiError> {
        let url = self.resource_url(&request.parent, "/entityTypes");

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(size) = request.page_size {
            query.push(("pageSize", size.to_string()));
        }
        if let Some(ref token) = request.page_token {
            query.push(("pageToken", token.clone()));
        }

        debug!(parent = %request.parent, paged = request.page_token.is_some(), "list session entity types");

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.config.access_token)
            .query(&query)
            .send()
            .await
            .map_err(network_error)?;

        parse_json(check(response).await?).await
    }

    async fn get_session_entity_type(
        &self,
        request: &GetSessionEntityTypeRequest,
    ) -> Result<SessionEntityType, ApiError> {
        let url = self.resource_url(&request.name, "");

        debug!(name = %request.name, "get session entity type");

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await
            .map_err(network_error)?;

        parse_json(check(response).await?).await
    }

    async fn create_session_entity_type(
        &self,
        request: &CreateSessionEntityTypeRequest,
    ) -> Result<SessionEntityType, ApiError> {
        let url = self.resource_url(&request.parent, "/entityTypes");

        debug!(
            parent = %request.parent,
            name = %request.session_entity_type.name,
            "create session entity type"
        );

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.config.access_token)
            .json(&request.session_entity_type)
            .send()
            .await
            .map_err(network_error)?;

        parse_json(check(response).await?).await
    }

    async fn update_session_entity_type(
        &self,
        request: &UpdateSessionEntityTypeRequest,
    ) -> Result<SessionEntityType, ApiError> {
        let name = &request.session_entity_type.name;
        let url = self.resource_url(name, "");

        debug!(name = %name, mask = ?request.update_mask, "update session entity type");

        let mut builder = self
            .http
            .patch(url)
            .bearer_auth(&self.config.access_token)
            .json(&request.session_entity_type);
        if !request.update_mask.is_empty() {
            builder = builder.query(&[("updateMask", request.update_mask.join(","))]);
        }

        let response = builder.send().await.map_err(network_error)?;

        parse_json(check(response).await?).await
    }

    async fn delete_session_entity_type(
        &self,
        request: &DeleteSessionEntityTypeRequest,
    ) -> Result<(), ApiError> {
        let url = self.resource_url(&request.name, "");

        debug!(name = %request.name, "delete session entity type");

        let response = self
            .http
            .delete(url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await
            .map_err(network_error)?;

        check(response).await?;
        Ok(())
    }
}
