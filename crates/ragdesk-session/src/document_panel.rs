//! Document list, search results, and their workflows for the selected
//! organization.

use crate::OrgStore;
use ragdesk_api_client::RagBackend;
use ragdesk_core::models::Document;
use std::sync::Arc;
use tracing::{debug, warn};

const LOAD_FAILED: &str = "Failed to load documents";
const UPLOAD_FAILED: &str = "Failed to upload document";
const UPDATE_FAILED: &str = "Failed to update document";
const DELETE_FAILED: &str = "Failed to delete document";
const SEARCH_FAILED: &str = "Search failed";

/// Per-organization document panel state.
///
/// Exclusively owned by its view: methods take `&mut self` and nothing
/// else mutates it. The document list is kept most-recent-first; uploads
/// prepend the backend's echo rather than triggering a full reload. The
/// search-result list is independent state — running a search never
/// touches `documents`.
pub struct DocumentPanel {
    backend: Arc<dyn RagBackend>,
    orgs: Arc<OrgStore>,
    documents: Vec<Document>,
    search_results: Vec<Document>,
    loading: bool,
    error: Option<String>,
}

impl DocumentPanel {
    pub fn new(backend: Arc<dyn RagBackend>, orgs: Arc<OrgStore>) -> Self {
        Self {
            backend,
            orgs,
            documents: Vec::new(),
            search_results: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn search_results(&self) -> &[Document] {
        &self.search_results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current error banner, if the last operation failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Fetch and replace the document list for the selected organization.
    ///
    /// No-op when nothing is selected. If the selection changes while the
    /// request is in flight, the response is discarded: it belongs to a
    /// superseded organization.
    pub async fn load_documents(&mut self) {
        let Some(org_id) = self.orgs.selected_id() else {
            return;
        };
        let epoch = self.orgs.selection_epoch();

        self.error = None;
        self.loading = true;
        let result = self.backend.list_documents(org_id).await;
        self.loading = false;

        if self.orgs.selection_epoch() != epoch {
            debug!(org_id, "discarding document list for superseded selection");
            return;
        }

        match result {
            Ok(documents) => self.documents = documents,
            Err(error) => {
                warn!(%error, org_id, "failed to load documents");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
    }

    /// Upload a document into the selected organization.
    ///
    /// No content rules are enforced client-side; empty content is
    /// allowed. On success the backend's echo is prepended to the list and
    /// `true` is returned so the view can clear its form; on failure the
    /// form stays populated for a retry.
    pub async fn upload(&mut self, title: &str, content: &str) -> bool {
        let Some(org_id) = self.orgs.selected_id() else {
            return false;
        };

        self.error = None;
        match self.backend.upload_document(title, content, org_id).await {
            Ok(document) => {
                self.documents.insert(0, document);
                true
            }
            Err(error) => {
                warn!(%error, org_id, "failed to upload document");
                self.error = Some(UPLOAD_FAILED.to_string());
                false
            }
        }
    }

    /// Update a document's title and/or content, replacing the stored
    /// entry with the backend's echo. The entry keeps its position.
    pub async fn update(&mut self, id: i64, title: Option<&str>, content: Option<&str>) -> bool {
        if title.is_none() && content.is_none() {
            return false;
        }

        self.error = None;
        match self.backend.update_document(id, title, content).await {
            Ok(updated) => {
                if let Some(entry) = self.documents.iter_mut().find(|doc| doc.id == id) {
                    *entry = updated;
                }
                true
            }
            Err(error) => {
                warn!(%error, id, "failed to update document");
                self.error = Some(UPDATE_FAILED.to_string());
                false
            }
        }
    }

    /// Delete a document. The entry is removed only after the backend
    /// confirms — no optimistic removal. Confirmation prompts are the
    /// view's responsibility; by the time this runs the user already said
    /// yes.
    pub async fn delete(&mut self, id: i64) {
        match self.backend.delete_document(id).await {
            Ok(()) => self.documents.retain(|doc| doc.id != id),
            Err(error) => {
                warn!(%error, id, "failed to delete document");
                self.error = Some(DELETE_FAILED.to_string());
            }
        }
    }

    /// Relevance search within the selected organization, replacing the
    /// result list with the backend's ranked sequence.
    ///
    /// No-op on a blank query or when nothing is selected.
    pub async fn search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        let Some(org_id) = self.orgs.selected_id() else {
            return;
        };

        self.error = None;
        self.loading = true;
        let result = self.backend.search_documents(query, org_id).await;
        self.loading = false;

        match result {
            Ok(results) => self.search_results = results,
            Err(error) => {
                warn!(%error, org_id, "document search failed");
                self.error = Some(SEARCH_FAILED.to_string());
            }
        }
    }

    pub fn clear_search(&mut self) {
        self.search_results.clear();
    }
}
