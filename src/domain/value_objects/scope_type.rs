use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// 同期対象スコープの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScopeType {
    Everything,
    Program,
    Dataset,
    TrackedEntity,
    Event,
    DataValues,
}

impl ScopeType {
    pub const ALL: [ScopeType; 6] = [
        ScopeType::Everything,
        ScopeType::Program,
        ScopeType::Dataset,
        ScopeType::TrackedEntity,
        ScopeType::Event,
        ScopeType::DataValues,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeType::Everything => "EVERYTHING",
            ScopeType::Program => "PROGRAM",
            ScopeType::Dataset => "DATASET",
            ScopeType::TrackedEntity => "TRACKED_ENTITY",
            ScopeType::Event => "EVENT",
            ScopeType::DataValues => "DATA_VALUES",
        }
    }

    /// Completion records only exist for dataset-like scopes.
    pub fn has_completion_records(&self) -> bool {
        matches!(self, ScopeType::Dataset)
    }
}

impl fmt::Display for ScopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScopeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScopeType::ALL
            .into_iter()
            .find(|scope_type| scope_type.as_str() == s)
            .ok_or_else(|| format!("Unknown scope type: {s}"))
    }
}
