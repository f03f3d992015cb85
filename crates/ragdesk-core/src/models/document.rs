use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A titled text record owned by exactly one organization.
///
/// Search results share this shape; their rank is positional in the
/// sequence the backend returns and is only materialized as a 1-based
/// label at render time.
///
/// The backend also emits `hash` and `document_metadata`; neither is used
/// client-side, and unknown fields are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub org_id: i64,
    pub title: String,
    pub content: String,
    // Naive UTC: the backend serializes timestamps without an offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}
