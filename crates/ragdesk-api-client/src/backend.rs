//! The seam between the state layer and the network.
//!
//! Controllers depend on `Arc<dyn RagBackend>` instead of the concrete
//! [`ApiClient`], so tests can drive them against a scripted fake.

use crate::api::ChatReply;
use crate::{ApiClient, RequestError};
use async_trait::async_trait;
use ragdesk_core::models::{Document, Organization};

/// Backend operations the session layer consumes.
#[async_trait]
pub trait RagBackend: Send + Sync {
    async fn list_organizations(&self) -> Result<Vec<Organization>, RequestError>;
    async fn create_organization(&self, name: &str) -> Result<Organization, RequestError>;
    async fn delete_organization(&self, id: i64) -> Result<(), RequestError>;
    async fn list_documents(&self, org_id: i64) -> Result<Vec<Document>, RequestError>;
    async fn upload_document(
        &self,
        title: &str,
        content: &str,
        org_id: i64,
    ) -> Result<Document, RequestError>;
    async fn update_document(
        &self,
        id: i64,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Document, RequestError>;
    async fn delete_document(&self, id: i64) -> Result<(), RequestError>;
    async fn search_documents(
        &self,
        query: &str,
        org_id: i64,
    ) -> Result<Vec<Document>, RequestError>;
    async fn query_chat(&self, query: &str, org_id: i64) -> Result<ChatReply, RequestError>;
}

#[async_trait]
impl RagBackend for ApiClient {
    async fn list_organizations(&self) -> Result<Vec<Organization>, RequestError> {
        ApiClient::list_organizations(self).await
    }

    async fn create_organization(&self, name: &str) -> Result<Organization, RequestError> {
        ApiClient::create_organization(self, name).await
    }

    async fn delete_organization(&self, id: i64) -> Result<(), RequestError> {
        ApiClient::delete_organization(self, id).await
    }

    async fn list_documents(&self, org_id: i64) -> Result<Vec<Document>, RequestError> {
        ApiClient::list_documents(self, org_id).await
    }

    async fn upload_document(
        &self,
        title: &str,
        content: &str,
        org_id: i64,
    ) -> Result<Document, RequestError> {
        ApiClient::upload_document(self, title, content, org_id).await
    }

    async fn update_document(
        &self,
        id: i64,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Document, RequestError> {
        ApiClient::update_document(self, id, title, content).await
    }

    async fn delete_document(&self, id: i64) -> Result<(), RequestError> {
        ApiClient::delete_document(self, id).await
    }

    async fn search_documents(
        &self,
        query: &str,
        org_id: i64,
    ) -> Result<Vec<Document>, RequestError> {
        ApiClient::search_documents(self, query, org_id).await
    }

    async fn query_chat(&self, query: &str, org_id: i64) -> Result<ChatReply, RequestError> {
        ApiClient::query_chat(self, query, org_id).await
    }
}
