use crate::domain::entities::{ErrorRecord, SyncStatusView};
use crate::domain::value_objects::{ScopeType, SyncState};
use crate::presentation::dto::Validate;
use crate::shared::AppError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatusRequest {
    pub scope_type: String,
    pub scope_id: String,
    pub organisation_unit: Option<String>,
    pub attribute_option_combo: Option<String>,
    pub period: Option<String>,
}

impl Validate for SyncStatusRequest {
    fn validate(&self) -> Result<(), String> {
        let scope_type = self.scope_type.parse::<ScopeType>()?;
        if self.scope_id.trim().is_empty() {
            return Err("Scope ID is required".to_string());
        }
        if scope_type == ScopeType::DataValues {
            let missing = [
                ("organisationUnit", &self.organisation_unit),
                ("attributeOptionCombo", &self.attribute_option_combo),
                ("period", &self.period),
            ]
            .into_iter()
            .find(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()));
            if let Some((name, _)) = missing {
                return Err(format!("{name} is required for DATA_VALUES scopes"));
            }
        }
        Ok(())
    }
}

/// Status bucket shown to the user.
///
/// `Unknown` means the status could not be computed and must never be read as
/// synced or errored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayStatus {
    Synced,
    HasLocalChanges,
    Error,
    Unknown,
}

impl From<SyncState> for DisplayStatus {
    fn from(state: SyncState) -> Self {
        match state {
            SyncState::Error => DisplayStatus::Error,
            state if state.has_local_changes() => DisplayStatus::HasLocalChanges,
            _ => DisplayStatus::Synced,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SyncErrorEntry {
    pub code: String,
    pub description: String,
    pub occurred_at: String,
    pub source: String,
}

impl From<&ErrorRecord> for SyncErrorEntry {
    fn from(record: &ErrorRecord) -> Self {
        Self {
            code: record.code.clone(),
            description: record.description.clone(),
            occurred_at: record.occurred_at.to_rfc3339(),
            source: record.source_kind.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatusResponse {
    pub status: DisplayStatus,
    pub state: Option<SyncState>,
    pub errors: Vec<SyncErrorEntry>,
    pub sms_offered: bool,
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl SyncStatusResponse {
    pub fn unknown(error: &AppError) -> Self {
        Self {
            status: DisplayStatus::Unknown,
            state: None,
            errors: Vec::new(),
            sms_offered: false,
            title: None,
            failure: Some(error.to_string()),
        }
    }
}

impl From<SyncStatusView> for SyncStatusResponse {
    fn from(view: SyncStatusView) -> Self {
        Self {
            status: DisplayStatus::from(view.state),
            state: Some(view.state),
            errors: view.errors.iter().map(SyncErrorEntry::from).collect(),
            sms_offered: view.sms_offered,
            title: view.title,
            failure: None,
        }
    }
}
