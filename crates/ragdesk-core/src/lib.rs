//! Ragdesk core library
//!
//! Domain models, client configuration, and display helpers shared by the
//! API client, the session layer, and the CLI.

pub mod config;
pub mod models;
pub mod preview;

// Re-export commonly used types
pub use config::ClientConfig;
pub use models::{ChatMessage, Document, Organization, Role, Source};
pub use preview::preview;
