use crate::application::ports::{DeviceCapabilityProbe, SyncErrorSource, SyncStateSource};
use crate::domain::entities::{
    CompletionRecord, ImportConflictItem, IntegrityViolationItem, ServerErrorItem, SyncScope,
    SyncStatusView,
};
use crate::domain::sync_status::{ErrorAggregator, is_offered, reconcile};
use crate::domain::value_objects::SyncState;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

#[async_trait]
pub trait SyncStatusServiceTrait: Send + Sync {
    async fn build_view(&self, scope: &SyncScope) -> Result<SyncStatusView, AppError>;
    async fn build_view_with_cancel(
        &self,
        scope: &SyncScope,
        cancel: &CancellationToken,
    ) -> Result<SyncStatusView, AppError>;
}

struct StateInputs {
    candidates: Vec<SyncState>,
    completions: Vec<CompletionRecord>,
    title: Option<String>,
}

struct ErrorInputs {
    server_errors: Vec<ServerErrorItem>,
    integrity_violations: Vec<IntegrityViolationItem>,
    import_conflicts: Vec<ImportConflictItem>,
}

pub struct SyncStatusService {
    state_source: Arc<dyn SyncStateSource>,
    error_source: Arc<dyn SyncErrorSource>,
    device_probe: Arc<dyn DeviceCapabilityProbe>,
    aggregator: ErrorAggregator,
}

impl SyncStatusService {
    pub fn new(
        state_source: Arc<dyn SyncStateSource>,
        error_source: Arc<dyn SyncErrorSource>,
        device_probe: Arc<dyn DeviceCapabilityProbe>,
        aggregator: ErrorAggregator,
    ) -> Self {
        Self {
            state_source,
            error_source,
            device_probe,
            aggregator,
        }
    }

    async fn fetch_state_inputs(&self, scope: &SyncScope) -> Result<StateInputs, AppError> {
        // 完了レコードはデータセットのみ
        let completions = async {
            if scope.scope_type().has_completion_records() {
                self.state_source
                    .fetch_completion_records(&scope.scope_id)
                    .await
            } else {
                Ok(Vec::new())
            }
        };

        let (candidates, completions, title) = futures::try_join!(
            self.state_source.fetch_candidate_states(scope),
            completions,
            self.state_source.fetch_scope_title(scope),
        )?;

        Ok(StateInputs {
            candidates,
            completions,
            title,
        })
    }

    async fn fetch_error_inputs(&self) -> Result<ErrorInputs, AppError> {
        let (server_errors, integrity_violations, import_conflicts) = futures::try_join!(
            self.error_source.fetch_server_errors(),
            self.error_source.fetch_integrity_violations(),
            self.error_source.fetch_import_conflicts(),
        )?;

        Ok(ErrorInputs {
            server_errors,
            integrity_violations,
            import_conflicts,
        })
    }

    fn assemble(
        &self,
        scope: &SyncScope,
        states: StateInputs,
        errors: ErrorInputs,
        device_capable: bool,
    ) -> SyncStatusView {
        let state = reconcile(&states.candidates, &states.completions);
        let errors = self.aggregator.aggregate(
            &errors.server_errors,
            &errors.integrity_violations,
            &errors.import_conflicts,
        );
        let sms_offered = is_offered(scope.scope_type(), device_capable);

        SyncStatusView::new(state, errors, sms_offered, states.title)
    }
}

#[async_trait]
impl SyncStatusServiceTrait for SyncStatusService {
    async fn build_view(&self, scope: &SyncScope) -> Result<SyncStatusView, AppError> {
        let fetched = futures::try_join!(
            self.fetch_state_inputs(scope),
            self.fetch_error_inputs(),
            self.device_probe.probe_device_sms_capability(),
        );

        let (states, errors, device_capable) = match fetched {
            Ok(inputs) => inputs,
            Err(err) => {
                warn!(
                    scope_type = %scope.scope_type(),
                    scope_id = %scope.scope_id,
                    error = %err,
                    "failed to fetch sync status inputs"
                );
                return Err(err);
            }
        };

        let view = self.assemble(scope, states, errors, device_capable);
        debug!(
            scope_type = %scope.scope_type(),
            scope_id = %scope.scope_id,
            state = %view.state,
            errors = view.errors.len(),
            sms_offered = view.sms_offered,
            "built sync status view"
        );
        Ok(view)
    }

    async fn build_view_with_cancel(
        &self,
        scope: &SyncScope,
        cancel: &CancellationToken,
    ) -> Result<SyncStatusView, AppError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(scope_id = %scope.scope_id, "sync status request cancelled");
                Err(AppError::Cancelled)
            }
            result = self.build_view(scope) => result,
        }
    }
}
