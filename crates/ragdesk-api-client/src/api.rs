//! Domain methods for the RAG backend client.
//!
//! One method per backend operation. Response envelopes mirror the
//! backend's handler shapes (`{organizations: [...]}` and friends);
//! methods unwrap them and hand back plain domain values.

use crate::{ApiClient, RequestError};
use ragdesk_core::models::{Document, Organization, Source};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct OrganizationListResponse {
    pub organizations: Vec<Organization>,
}

#[derive(Debug, Deserialize)]
pub struct OrganizationResponse {
    pub organization: Organization,
}

#[derive(Debug, Deserialize)]
pub struct DocumentListResponse {
    pub documents: Vec<Document>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentResponse {
    pub document: Document,
}

/// Search response: `{query, results}`, results already ranked by the
/// backend. The client adds no scoring of its own.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: Option<String>,
    pub results: Vec<Document>,
}

/// Answer to a chat query: generated text plus the documents it cites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl ApiClient {
    /// List all organizations.
    pub async fn list_organizations(&self) -> Result<Vec<Organization>, RequestError> {
        let response: OrganizationListResponse = self.get("/organizations/", &[]).await?;
        Ok(response.organizations)
    }

    /// Fetch a single organization by id.
    pub async fn get_organization(&self, id: i64) -> Result<Organization, RequestError> {
        let response: OrganizationResponse =
            self.get(&format!("/organizations/{}", id), &[]).await?;
        Ok(response.organization)
    }

    /// Create an organization and return the backend's echo of it.
    pub async fn create_organization(&self, name: &str) -> Result<Organization, RequestError> {
        let response: OrganizationResponse = self
            .post_json("/organizations/", &serde_json::json!({ "name": name }))
            .await?;
        Ok(response.organization)
    }

    /// Delete an organization (the backend cascades to its documents).
    pub async fn delete_organization(&self, id: i64) -> Result<(), RequestError> {
        self.delete(&format!("/organizations/{}", id)).await
    }

    /// List the documents owned by one organization.
    pub async fn list_documents(&self, org_id: i64) -> Result<Vec<Document>, RequestError> {
        let response: DocumentListResponse = self
            .get("/documents/", &[("org_id", org_id.to_string())])
            .await?;
        Ok(response.documents)
    }

    /// Upload a document. The backend embeds the content and echoes the
    /// stored record back.
    pub async fn upload_document(
        &self,
        title: &str,
        content: &str,
        org_id: i64,
    ) -> Result<Document, RequestError> {
        let body = serde_json::json!({
            "title": title,
            "content": content,
            "metadata": {},
            "org_id": org_id,
        });
        let response: DocumentResponse = self.post_json("/documents/upload", &body).await?;
        Ok(response.document)
    }

    /// Update a document's title and/or content. A content change makes
    /// the backend re-embed the document.
    pub async fn update_document(
        &self,
        id: i64,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Document, RequestError> {
        let mut body = serde_json::Map::new();
        if let Some(title) = title {
            body.insert("title".to_string(), title.into());
        }
        if let Some(content) = content {
            body.insert("content".to_string(), content.into());
        }
        let response: DocumentResponse = self
            .put_json(&format!("/documents/{}", id), &serde_json::Value::Object(body))
            .await?;
        Ok(response.document)
    }

    /// Delete a document by id.
    pub async fn delete_document(&self, id: i64) -> Result<(), RequestError> {
        self.delete(&format!("/documents/{}", id)).await
    }

    /// Relevance search within one organization. Results come back in
    /// backend rank order.
    pub async fn search_documents(
        &self,
        query: &str,
        org_id: i64,
    ) -> Result<Vec<Document>, RequestError> {
        let body = serde_json::json!({ "query": query, "org_id": org_id });
        let response: SearchResponse = self.post_json("/documents/search", &body).await?;
        Ok(response.results)
    }

    /// Ask the question-answering assistant, scoped to one organization's
    /// document set.
    pub async fn query_chat(&self, query: &str, org_id: i64) -> Result<ChatReply, RequestError> {
        let body = serde_json::json!({ "query": query, "org_id": org_id });
        self.post_json("/chat/query", &body).await
    }
}
