use serde::{Deserialize, Serialize};
use std::fmt;

/// エラーの発生元サブシステム
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorSourceKind {
    ServerResponse,
    ReferentialIntegrity,
    ImportConflict,
}

impl ErrorSourceKind {
    /// Group position in the aggregated error list, lowest first.
    pub fn priority(&self) -> u8 {
        match self {
            ErrorSourceKind::ServerResponse => 0,
            ErrorSourceKind::ReferentialIntegrity => 1,
            ErrorSourceKind::ImportConflict => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorSourceKind::ServerResponse => "SERVER_RESPONSE",
            ErrorSourceKind::ReferentialIntegrity => "REFERENTIAL_INTEGRITY",
            ErrorSourceKind::ImportConflict => "IMPORT_CONFLICT",
        }
    }
}

impl fmt::Display for ErrorSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
