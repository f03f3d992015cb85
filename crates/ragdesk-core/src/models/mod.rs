pub mod chat;
pub mod document;
pub mod organization;

pub use chat::{ChatMessage, Role, Source};
pub use document::Document;
pub use organization::Organization;
