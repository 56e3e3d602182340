use crate::domain::value_objects::{ScopeId, SyncState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// データセット登録完了マーカー
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub scope_id: ScopeId,
    pub period: String,
    pub organisation_unit: String,
    pub attribute_combo: String,
    pub recorded_at: DateTime<Utc>,
    pub state: SyncState,
}

impl CompletionRecord {
    pub fn new(
        scope_id: ScopeId,
        period: String,
        organisation_unit: String,
        attribute_combo: String,
        recorded_at: DateTime<Utc>,
        state: SyncState,
    ) -> Self {
        Self {
            scope_id,
            period,
            organisation_unit,
            attribute_combo,
            recorded_at,
            state,
        }
    }

    /// State as seen by the status reconciler.
    ///
    /// A registration that only exists locally counts as a pending update.
    pub fn effective_state(&self) -> SyncState {
        match self.state {
            SyncState::PendingCreate => SyncState::PendingUpdate,
            other => other,
        }
    }
}
