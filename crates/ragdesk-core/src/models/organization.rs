use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tenant-like grouping that scopes documents and chat queries.
///
/// Immutable once created; the backend only ever creates or deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
