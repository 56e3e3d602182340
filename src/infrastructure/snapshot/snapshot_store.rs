use crate::application::ports::{DeviceCapabilityProbe, SyncErrorSource, SyncStateSource};
use crate::domain::entities::{
    CompletionRecord, ImportConflictItem, IntegrityViolationItem, ScopeTarget, ServerErrorItem,
    SyncScope,
};
use crate::domain::value_objects::{ScopeId, SyncState};
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Local records of one scope as last read from the device database.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScopeSnapshot {
    pub title: Option<String>,
    pub states: Vec<SyncState>,
    pub completions: Vec<CompletionRecord>,
}

/// Point-in-time copy of everything the status engine reads.
///
/// Scopes are keyed by [`snapshot_key`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncSnapshot {
    pub scopes: HashMap<String, ScopeSnapshot>,
    pub server_errors: Vec<ServerErrorItem>,
    pub integrity_violations: Vec<IntegrityViolationItem>,
    pub import_conflicts: Vec<ImportConflictItem>,
    pub sms_capable: bool,
}

/// Key of a scope inside [`SyncSnapshot::scopes`].
///
/// Data-value batches are addressed by dataset, org unit, attribute option combo
/// and period joined with `|`; every other scope by its id.
pub fn snapshot_key(scope: &SyncScope) -> String {
    match &scope.target {
        ScopeTarget::DataValues {
            organisation_unit,
            attribute_option_combo,
            period,
        } => format!(
            "{}|{}|{}|{}",
            scope.scope_id, organisation_unit, attribute_option_combo, period
        ),
        _ => scope.scope_id.to_string(),
    }
}

/// In-memory adapter serving all status ports from a [`SyncSnapshot`].
#[derive(Clone, Default)]
pub struct SnapshotSyncStore {
    snapshot: Arc<RwLock<SyncSnapshot>>,
    unavailable: Arc<RwLock<Option<String>>>,
}

impl SnapshotSyncStore {
    pub fn new(snapshot: SyncSnapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(snapshot)),
            unavailable: Arc::new(RwLock::new(None)),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let snapshot: SyncSnapshot = serde_json::from_str(json)?;
        Ok(Self::new(snapshot))
    }

    /// 新しいスナップショットに差し替える
    pub async fn replace(&self, snapshot: SyncSnapshot) {
        *self.snapshot.write().await = snapshot;
    }

    /// While set, every fetch fails with [`AppError::DataAccess`] carrying `reason`.
    pub async fn set_unavailable(&self, reason: Option<String>) {
        *self.unavailable.write().await = reason;
    }

    async fn read(&self) -> Result<tokio::sync::RwLockReadGuard<'_, SyncSnapshot>, AppError> {
        if let Some(reason) = self.unavailable.read().await.as_ref() {
            return Err(AppError::DataAccess(reason.clone()));
        }
        Ok(self.snapshot.read().await)
    }
}

#[async_trait]
impl SyncStateSource for SnapshotSyncStore {
    async fn fetch_candidate_states(&self, scope: &SyncScope) -> Result<Vec<SyncState>, AppError> {
        let snapshot = self.read().await?;
        let states = match scope.target {
            ScopeTarget::Everything => snapshot
                .scopes
                .values()
                .flat_map(|entry| entry.states.iter().copied())
                .collect(),
            _ => snapshot
                .scopes
                .get(&snapshot_key(scope))
                .map(|entry| entry.states.clone())
                .unwrap_or_default(),
        };
        Ok(states)
    }

    async fn fetch_completion_records(
        &self,
        scope_id: &ScopeId,
    ) -> Result<Vec<CompletionRecord>, AppError> {
        let snapshot = self.read().await?;
        Ok(snapshot
            .scopes
            .get(scope_id.as_str())
            .map(|entry| entry.completions.clone())
            .unwrap_or_default())
    }

    async fn fetch_scope_title(&self, scope: &SyncScope) -> Result<Option<String>, AppError> {
        let snapshot = self.read().await?;
        Ok(snapshot
            .scopes
            .get(&snapshot_key(scope))
            .and_then(|entry| entry.title.clone()))
    }
}

#[async_trait]
impl SyncErrorSource for SnapshotSyncStore {
    async fn fetch_server_errors(&self) -> Result<Vec<ServerErrorItem>, AppError> {
        Ok(self.read().await?.server_errors.clone())
    }

    async fn fetch_integrity_violations(&self) -> Result<Vec<IntegrityViolationItem>, AppError> {
        Ok(self.read().await?.integrity_violations.clone())
    }

    async fn fetch_import_conflicts(&self) -> Result<Vec<ImportConflictItem>, AppError> {
        Ok(self.read().await?.import_conflicts.clone())
    }
}

#[async_trait]
impl DeviceCapabilityProbe for SnapshotSyncStore {
    async fn probe_device_sms_capability(&self) -> Result<bool, AppError> {
        Ok(self.read().await?.sms_capable)
    }
}
