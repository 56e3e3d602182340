use crate::application::services::SyncStatusServiceTrait;
use crate::domain::entities::{SyncScope, SyncStatusView};
use crate::domain::value_objects::{ScopeId, ScopeType};
use crate::presentation::dto::Validate;
use crate::presentation::dto::sync_status::{SyncStatusRequest, SyncStatusResponse};
use crate::shared::AppError;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub struct SyncStatusHandler {
    sync_status_service: Arc<dyn SyncStatusServiceTrait>,
}

impl SyncStatusHandler {
    pub fn new(sync_status_service: Arc<dyn SyncStatusServiceTrait>) -> Self {
        Self {
            sync_status_service,
        }
    }

    /// Invalid requests are returned as errors. Failures while computing the status
    /// are reported inside the response as [`DisplayStatus::Unknown`].
    ///
    /// [`DisplayStatus::Unknown`]: crate::presentation::dto::sync_status::DisplayStatus::Unknown
    pub async fn get_sync_status(
        &self,
        request: SyncStatusRequest,
    ) -> Result<SyncStatusResponse, AppError> {
        let scope = parse_scope(&request)?;
        let result = self.sync_status_service.build_view(&scope).await;
        Ok(into_response(&scope, result))
    }

    pub async fn get_sync_status_with_cancel(
        &self,
        request: SyncStatusRequest,
        cancel: CancellationToken,
    ) -> Result<SyncStatusResponse, AppError> {
        let scope = parse_scope(&request)?;
        let result = self
            .sync_status_service
            .build_view_with_cancel(&scope, &cancel)
            .await;
        Ok(into_response(&scope, result))
    }
}

fn parse_scope(request: &SyncStatusRequest) -> Result<SyncScope, AppError> {
    request.validate().map_err(AppError::ValidationError)?;

    let scope_type = request
        .scope_type
        .parse::<ScopeType>()
        .map_err(AppError::ValidationError)?;
    let scope_id = ScopeId::parse(&request.scope_id).map_err(AppError::ValidationError)?;

    let scope = match scope_type {
        ScopeType::DataValues => SyncScope::data_values(
            scope_id,
            request.organisation_unit.clone().unwrap_or_default(),
            request.attribute_option_combo.clone().unwrap_or_default(),
            request.period.clone().unwrap_or_default(),
        ),
        other => SyncScope::simple(other, scope_id),
    };
    scope.map_err(AppError::ValidationError)
}

fn into_response(
    scope: &SyncScope,
    result: Result<SyncStatusView, AppError>,
) -> SyncStatusResponse {
    match result {
        Ok(view) => SyncStatusResponse::from(view),
        Err(err) => {
            info!(
                scope_id = %scope.scope_id,
                code = err.code(),
                "sync status unavailable"
            );
            SyncStatusResponse::unknown(&err)
        }
    }
}
