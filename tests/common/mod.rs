use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use granular_sync_lib::AppConfig;
use granular_sync_lib::domain::entities::{
    ImportConflictItem, ImportStatus, IntegrityViolationItem, ServerErrorItem,
};
use granular_sync_lib::infrastructure::snapshot::{ScopeSnapshot, SnapshotSyncStore, SyncSnapshot};
use granular_sync_lib::presentation::dto::sync_status::SyncStatusRequest;
use granular_sync_lib::state::AppState;
use granular_sync_lib::SyncState;

pub struct SyncStatusTestContext {
    pub state: AppState,
    pub store: Arc<SnapshotSyncStore>,
}

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub fn seeded_snapshot() -> SyncSnapshot {
    let mut snapshot = SyncSnapshot {
        sms_capable: true,
        server_errors: vec![ServerErrorItem {
            http_status: Some(500),
            error_code: "API_RESPONSE_PROCESS_ERROR".into(),
            description: "ErrorDescription".into(),
            created_at: at(2020, 1, 1, 0),
        }],
        integrity_violations: vec![IntegrityViolationItem {
            from_table: "FromTable".into(),
            to_table: "ToTable".into(),
            not_found_value: "NotFoundValue".into(),
            from_object_uid: "FromObjectUid".into(),
            created_at: at(2020, 1, 2, 12),
        }],
        import_conflicts: vec![ImportConflictItem {
            error_code: "API".into(),
            display_description: "DisplayDescription".into(),
            conflict: "Conflict".into(),
            status: ImportStatus::Error,
            created_at: at(2020, 1, 1, 0),
        }],
        ..Default::default()
    };

    snapshot.scopes.insert(
        "program_uid".into(),
        ScopeSnapshot {
            title: Some("Child Programme".into()),
            states: vec![SyncState::Synced, SyncState::PendingCreate],
            completions: Vec::new(),
        },
    );
    snapshot.scopes.insert(
        "event_uid".into(),
        ScopeSnapshot {
            title: Some("Antenatal care visit".into()),
            states: vec![SyncState::Error],
            completions: Vec::new(),
        },
    );
    snapshot
}

pub fn setup_context(snapshot: SyncSnapshot) -> SyncStatusTestContext {
    let mut config = AppConfig::default();
    config.errors.integrity_description_template = "%s %s %s %s".into();

    let store = Arc::new(SnapshotSyncStore::new(snapshot));
    let state = AppState::with_store(config, store.clone()).expect("app state");

    SyncStatusTestContext { state, store }
}

pub fn request(scope_type: &str, scope_id: &str) -> SyncStatusRequest {
    SyncStatusRequest {
        scope_type: scope_type.to_string(),
        scope_id: scope_id.to_string(),
        organisation_unit: None,
        attribute_option_combo: None,
        period: None,
    }
}
