use crate::application::ports::{DeviceCapabilityProbe, SyncErrorSource, SyncStateSource};
use crate::application::services::{SyncStatusService, SyncStatusServiceTrait};
use crate::domain::sync_status::ErrorAggregator;
use crate::presentation::handlers::SyncStatusHandler;
use crate::shared::{AppConfig, AppError};
use std::sync::Arc;
use tracing::info;

/// 同期ステータス画面で使う依存関係をまとめた構造体
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub sync_status_service: Arc<dyn SyncStatusServiceTrait>,
    pub sync_status_handler: Arc<SyncStatusHandler>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        state_source: Arc<dyn SyncStateSource>,
        error_source: Arc<dyn SyncErrorSource>,
        device_probe: Arc<dyn DeviceCapabilityProbe>,
    ) -> Result<Self, AppError> {
        config.validate().map_err(AppError::ConfigurationError)?;

        let aggregator = ErrorAggregator::from_config(&config.errors);
        let sync_status_service: Arc<dyn SyncStatusServiceTrait> = Arc::new(
            SyncStatusService::new(state_source, error_source, device_probe, aggregator),
        );
        let sync_status_handler = Arc::new(SyncStatusHandler::new(sync_status_service.clone()));

        info!("sync status state initialized");

        Ok(Self {
            config,
            sync_status_service,
            sync_status_handler,
        })
    }

    /// Wires every port to the same adapter, e.g. a [`SnapshotSyncStore`].
    ///
    /// [`SnapshotSyncStore`]: crate::infrastructure::SnapshotSyncStore
    pub fn with_store<S>(config: AppConfig, store: Arc<S>) -> Result<Self, AppError>
    where
        S: SyncStateSource + SyncErrorSource + DeviceCapabilityProbe + 'static,
    {
        Self::new(config, store.clone(), store.clone(), store)
    }
}
