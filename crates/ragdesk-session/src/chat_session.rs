//! Chat transcript and in-flight query tracking.

use crate::OrgStore;
use ragdesk_api_client::RagBackend;
use ragdesk_core::models::ChatMessage;
use std::sync::Arc;
use tracing::warn;

const CHAT_FAILED: &str = "Failed to get response. Please try again.";

/// One conversation with the assistant.
///
/// The transcript is append-only and insertion-ordered. User and
/// assistant turns alternate in the happy path, but nothing enforces it:
/// a failed query leaves the user's message dangling with no paired
/// reply, and the next send appends another user turn right after it.
///
/// The transcript is deliberately not cleared when the organization
/// selection changes — it works as a cross-organization scratchpad. Only
/// [`ChatSession::clear`] empties it.
pub struct ChatSession {
    backend: Arc<dyn RagBackend>,
    orgs: Arc<OrgStore>,
    messages: Vec<ChatMessage>,
    next_id: u64,
    loading: bool,
    error: Option<String>,
}

impl ChatSession {
    pub fn new(backend: Arc<dyn RagBackend>, orgs: Arc<OrgStore>) -> Self {
        Self {
            backend,
            orgs,
            messages: Vec::new(),
            next_id: 0,
            loading: false,
            error: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn next_message_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Send a question to the assistant, scoped to the selected
    /// organization's documents.
    ///
    /// Blank text or an empty selection is silently refused. The user's
    /// message is appended synchronously, before any I/O, so the
    /// transcript reflects intent even when the backend call fails. On
    /// success the assistant's answer is appended with its sources; on
    /// failure an error banner is set and no assistant message appears.
    pub async fn send(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        let Some(org_id) = self.orgs.selected_id() else {
            return;
        };

        let user_id = self.next_message_id();
        self.messages.push(ChatMessage::user(user_id, text));
        self.error = None;
        self.loading = true;

        let result = self.backend.query_chat(text, org_id).await;
        self.loading = false;

        match result {
            Ok(reply) => {
                let assistant_id = self.next_message_id();
                self.messages.push(ChatMessage::assistant(
                    assistant_id,
                    reply.response,
                    reply.sources,
                ));
            }
            Err(error) => {
                warn!(%error, org_id, "chat query failed");
                self.error = Some(CHAT_FAILED.to_string());
            }
        }
    }

    /// Discard the whole transcript and any error banner. Destroys only
    /// local display state, so no confirmation is required.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.error = None;
    }
}
