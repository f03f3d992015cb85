#![allow(dead_code)]

//! Shared test fixtures: a scripted in-memory backend substituted for the
//! HTTP client behind the `RagBackend` seam.

use async_trait::async_trait;
use ragdesk_api_client::api::ChatReply;
use ragdesk_api_client::{RagBackend, RequestError};
use ragdesk_core::models::{Document, Organization, Source};
use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

pub fn org(id: i64, name: &str) -> Organization {
    Organization {
        id,
        name: name.to_string(),
        created_at: None,
    }
}

pub fn doc(id: i64, org_id: i64, title: &str) -> Document {
    Document {
        id,
        org_id,
        title: title.to_string(),
        content: format!("{} content", title),
        created_at: None,
    }
}

pub fn source(title: &str) -> Source {
    Source {
        id: None,
        title: title.to_string(),
        content_preview: None,
    }
}

fn backend_error() -> RequestError {
    RequestError::Status {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        body: r#"{"error": "boom"}"#.to_string(),
    }
}

type Hook = Box<dyn Fn() + Send + Sync>;

/// Scripted stand-in for the HTTP backend.
///
/// Canned data per operation, a set of operation names forced to fail,
/// and a call log for asserting that guards issued no request. The
/// `on_list_documents` hook runs while that request is "in flight", which
/// lets tests change the organization selection mid-request.
pub struct FakeBackend {
    pub organizations: Mutex<Vec<Organization>>,
    pub documents: Mutex<Vec<Document>>,
    pub search_hits: Mutex<Vec<Document>>,
    pub chat_answer: Mutex<ChatReply>,
    pub failing: Mutex<HashSet<&'static str>>,
    pub calls: Mutex<Vec<String>>,
    pub on_list_documents: Mutex<Option<Hook>>,
    next_id: AtomicI64,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            organizations: Mutex::new(Vec::new()),
            documents: Mutex::new(Vec::new()),
            search_hits: Mutex::new(Vec::new()),
            chat_answer: Mutex::new(ChatReply {
                response: String::new(),
                sources: Vec::new(),
            }),
            failing: Mutex::new(HashSet::new()),
            calls: Mutex::new(Vec::new()),
            on_list_documents: Mutex::new(None),
            next_id: AtomicI64::new(100),
        }
    }

    pub fn seed_organizations(&self, orgs: Vec<Organization>) {
        *self.organizations.lock().unwrap() = orgs;
    }

    pub fn seed_documents(&self, docs: Vec<Document>) {
        *self.documents.lock().unwrap() = docs;
    }

    pub fn seed_search_hits(&self, docs: Vec<Document>) {
        *self.search_hits.lock().unwrap() = docs;
    }

    pub fn seed_chat_answer(&self, response: &str, sources: Vec<Source>) {
        *self.chat_answer.lock().unwrap() = ChatReply {
            response: response.to_string(),
            sources,
        };
    }

    /// Make one operation fail until cleared.
    pub fn fail(&self, operation: &'static str) {
        self.failing.lock().unwrap().insert(operation);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn check(&self, operation: &'static str) -> Result<(), RequestError> {
        if self.failing.lock().unwrap().contains(operation) {
            Err(backend_error())
        } else {
            Ok(())
        }
    }

    fn fresh_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

#[async_trait]
impl RagBackend for FakeBackend {
    async fn list_organizations(&self) -> Result<Vec<Organization>, RequestError> {
        self.record("list_organizations");
        self.check("list_organizations")?;
        Ok(self.organizations.lock().unwrap().clone())
    }

    async fn create_organization(&self, name: &str) -> Result<Organization, RequestError> {
        self.record(format!("create_organization:{}", name));
        self.check("create_organization")?;
        Ok(org(self.fresh_id(), name))
    }

    async fn delete_organization(&self, id: i64) -> Result<(), RequestError> {
        self.record(format!("delete_organization:{}", id));
        self.check("delete_organization")
    }

    async fn list_documents(&self, org_id: i64) -> Result<Vec<Document>, RequestError> {
        self.record(format!("list_documents:{}", org_id));
        if let Some(hook) = self.on_list_documents.lock().unwrap().take() {
            hook();
        }
        self.check("list_documents")?;
        Ok(self.documents.lock().unwrap().clone())
    }

    async fn upload_document(
        &self,
        title: &str,
        content: &str,
        org_id: i64,
    ) -> Result<Document, RequestError> {
        self.record(format!("upload_document:{}", title));
        self.check("upload_document")?;
        Ok(Document {
            id: self.fresh_id(),
            org_id,
            title: title.to_string(),
            content: content.to_string(),
            created_at: None,
        })
    }

    async fn update_document(
        &self,
        id: i64,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Document, RequestError> {
        self.record(format!("update_document:{}", id));
        self.check("update_document")?;
        let documents = self.documents.lock().unwrap();
        let mut updated = documents
            .iter()
            .find(|doc| doc.id == id)
            .cloned()
            .unwrap_or_else(|| doc(id, 0, "missing"));
        if let Some(title) = title {
            updated.title = title.to_string();
        }
        if let Some(content) = content {
            updated.content = content.to_string();
        }
        Ok(updated)
    }

    async fn delete_document(&self, id: i64) -> Result<(), RequestError> {
        self.record(format!("delete_document:{}", id));
        self.check("delete_document")
    }

    async fn search_documents(
        &self,
        query: &str,
        org_id: i64,
    ) -> Result<Vec<Document>, RequestError> {
        self.record(format!("search_documents:{}:{}", org_id, query));
        self.check("search_documents")?;
        Ok(self.search_hits.lock().unwrap().clone())
    }

    async fn query_chat(&self, query: &str, org_id: i64) -> Result<ChatReply, RequestError> {
        self.record(format!("query_chat:{}:{}", org_id, query));
        self.check("query_chat")?;
        Ok(self.chat_answer.lock().unwrap().clone())
    }
}
