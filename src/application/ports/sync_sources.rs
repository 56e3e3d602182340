use crate::domain::entities::{
    CompletionRecord, ImportConflictItem, IntegrityViolationItem, ServerErrorItem, SyncScope,
};
use crate::domain::value_objects::{ScopeId, SyncState};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Local record states for a scope.
#[async_trait]
pub trait SyncStateSource: Send + Sync {
    /// Unknown scopes return an empty list, not an error.
    async fn fetch_candidate_states(&self, scope: &SyncScope)
    -> Result<Vec<SyncState>, AppError>;
    async fn fetch_completion_records(
        &self,
        scope_id: &ScopeId,
    ) -> Result<Vec<CompletionRecord>, AppError>;
    async fn fetch_scope_title(&self, scope: &SyncScope) -> Result<Option<String>, AppError>;
}

/// Error logs kept by the maintenance and import subsystems.
#[async_trait]
pub trait SyncErrorSource: Send + Sync {
    async fn fetch_server_errors(&self) -> Result<Vec<ServerErrorItem>, AppError>;
    async fn fetch_integrity_violations(&self) -> Result<Vec<IntegrityViolationItem>, AppError>;
    async fn fetch_import_conflicts(&self) -> Result<Vec<ImportConflictItem>, AppError>;
}

#[async_trait]
pub trait DeviceCapabilityProbe: Send + Sync {
    async fn probe_device_sms_capability(&self) -> Result<bool, AppError>;
}
