//! Ragdesk session layer
//!
//! Owns all client-side state for one page session and mediates every
//! backend call. Three pieces:
//!
//! - [`OrgStore`]: the organization list and current selection. The single
//!   shared mutable resource; both other components read it, neither
//!   writes it.
//! - [`DocumentPanel`]: the selected organization's document list, search
//!   results, and the upload/update/delete/search workflows.
//! - [`ChatSession`]: the chat transcript and in-flight query tracking.
//!
//! State is rebuilt from the backend on startup; nothing here persists.
//! All failures degrade to a per-operation error banner plus continued
//! usability — there are no fatal errors.

pub mod chat_session;
pub mod document_panel;
pub mod org_store;

pub use chat_session::ChatSession;
pub use document_panel::DocumentPanel;
pub use org_store::OrgStore;
