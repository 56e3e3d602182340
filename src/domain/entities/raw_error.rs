use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Failure recorded while talking to the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerErrorItem {
    /// Absent when the request never got a response (timeouts, offline).
    pub http_status: Option<u16>,
    pub error_code: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Local row pointing at a record that does not exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityViolationItem {
    pub from_table: String,
    pub to_table: String,
    pub not_found_value: String,
    pub from_object_uid: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImportStatus {
    Error,
    Warning,
}

/// Per-record conflict reported back by the server import.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportConflictItem {
    pub error_code: String,
    pub display_description: String,
    pub conflict: String,
    pub status: ImportStatus,
    pub created_at: DateTime<Utc>,
}
