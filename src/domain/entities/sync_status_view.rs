use crate::domain::entities::ErrorRecord;
use crate::domain::value_objects::SyncState;
use serde::{Deserialize, Serialize};

/// Everything the sync status dialog shows for one scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatusView {
    pub state: SyncState,
    pub errors: Vec<ErrorRecord>,
    pub sms_offered: bool,
    pub title: Option<String>,
}

impl SyncStatusView {
    pub fn new(
        state: SyncState,
        errors: Vec<ErrorRecord>,
        sms_offered: bool,
        title: Option<String>,
    ) -> Self {
        Self {
            state,
            errors,
            sms_offered,
            title,
        }
    }
}
