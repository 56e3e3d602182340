use crate::domain::entities::raw_error::{
    ImportConflictItem, IntegrityViolationItem, ServerErrorItem,
};
use crate::domain::value_objects::ErrorSourceKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const INTEGRITY_ERROR_CODE: &str = "FK";

/// User-facing sync failure, whatever subsystem reported it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    pub code: String,
    pub description: String,
    pub occurred_at: DateTime<Utc>,
    pub source_kind: ErrorSourceKind,
}

impl ErrorRecord {
    pub fn from_server_error(item: &ServerErrorItem) -> Self {
        let code = match item.http_status {
            Some(status) => status.to_string(),
            None => item.error_code.clone(),
        };
        Self {
            code,
            description: item.description.clone(),
            occurred_at: item.created_at,
            source_kind: ErrorSourceKind::ServerResponse,
        }
    }

    /// `template` placeholders are filled with from-table, to-table, missing value
    /// and source uid, in that order.
    pub fn from_integrity_violation(item: &IntegrityViolationItem, template: &str) -> Self {
        let description = fill_placeholders(
            template,
            &[
                item.from_table.as_str(),
                item.to_table.as_str(),
                item.not_found_value.as_str(),
                item.from_object_uid.as_str(),
            ],
        );
        Self {
            code: INTEGRITY_ERROR_CODE.to_string(),
            description,
            occurred_at: item.created_at,
            source_kind: ErrorSourceKind::ReferentialIntegrity,
        }
    }

    pub fn from_import_conflict(item: &ImportConflictItem) -> Self {
        Self {
            code: item.error_code.clone(),
            description: item.display_description.clone(),
            occurred_at: item.created_at,
            source_kind: ErrorSourceKind::ImportConflict,
        }
    }
}

// 余ったプレースホルダは空文字、余った値は捨てる
fn fill_placeholders(template: &str, values: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut values = values.iter();
    let mut parts = template.split("%s");
    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for part in parts {
        if let Some(value) = values.next() {
            out.push_str(value);
        }
        out.push_str(part);
    }
    out
}
