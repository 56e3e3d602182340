mod common;

use common::{request, seeded_snapshot, setup_context};
use granular_sync_lib::domain::entities::CompletionRecord;
use granular_sync_lib::infrastructure::snapshot::{ScopeSnapshot, SyncSnapshot};
use granular_sync_lib::presentation::dto::sync_status::DisplayStatus;
use granular_sync_lib::{ScopeId, ScopeType, SyncScope, SyncState};
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn program_scope_reports_local_changes_without_sms() {
    let ctx = setup_context(seeded_snapshot());

    let response = ctx
        .state
        .sync_status_handler
        .get_sync_status(request("PROGRAM", "program_uid"))
        .await
        .expect("response");

    assert_eq!(response.status, DisplayStatus::HasLocalChanges);
    assert_eq!(response.state, Some(SyncState::PendingUpdate));
    assert_eq!(response.title.as_deref(), Some("Child Programme"));
    assert!(!response.sms_offered);

    let codes: Vec<&str> = response.errors.iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, vec!["500", "FK", "API"]);
    assert_eq!(
        response.errors[1].description,
        "FromTable ToTable NotFoundValue FromObjectUid"
    );
    assert_eq!(response.errors[1].source, "REFERENTIAL_INTEGRITY");
}

#[tokio::test]
async fn event_scope_with_error_offers_sms() {
    let ctx = setup_context(seeded_snapshot());

    let response = ctx
        .state
        .sync_status_handler
        .get_sync_status(request("EVENT", "event_uid"))
        .await
        .expect("response");

    assert_eq!(response.status, DisplayStatus::Error);
    assert!(response.sms_offered);
}

#[tokio::test]
async fn unknown_scope_is_synced() {
    let ctx = setup_context(SyncSnapshot::default());

    let response = ctx
        .state
        .sync_status_handler
        .get_sync_status(request("TRACKED_ENTITY", "missing_uid"))
        .await
        .expect("response");

    assert_eq!(response.status, DisplayStatus::Synced);
    assert!(response.errors.is_empty());
    assert!(!response.sms_offered);
    assert_eq!(response.title, None);
}

#[tokio::test]
async fn dataset_completion_records_drive_state() {
    let mut snapshot = SyncSnapshot::default();
    let scope_id = ScopeId::new("data_set_uid".into()).expect("scope id");
    snapshot.scopes.insert(
        "data_set_uid".into(),
        ScopeSnapshot {
            title: Some("Monthly report".into()),
            states: Vec::new(),
            completions: [SyncState::Error, SyncState::Synced]
                .into_iter()
                .map(|state| {
                    CompletionRecord::new(
                        scope_id.clone(),
                        "periodId".into(),
                        "org_unit".into(),
                        "attr_opt_comb".into(),
                        common::at(2020, 1, 1, 0),
                        state,
                    )
                })
                .collect(),
        },
    );
    let ctx = setup_context(snapshot);

    let view = ctx
        .state
        .sync_status_service
        .build_view(&SyncScope::simple(ScopeType::Dataset, scope_id).expect("scope"))
        .await
        .expect("view");

    assert_eq!(view.state, SyncState::Error);
    assert!(!view.sms_offered);
}

#[tokio::test]
async fn unavailable_store_reports_unknown_status() {
    let ctx = setup_context(seeded_snapshot());
    ctx.store
        .set_unavailable(Some("database is locked".into()))
        .await;

    let response = ctx
        .state
        .sync_status_handler
        .get_sync_status(request("EVENT", "event_uid"))
        .await
        .expect("response");

    assert_eq!(response.status, DisplayStatus::Unknown);
    assert_eq!(response.state, None);
    assert!(
        response
            .failure
            .as_deref()
            .is_some_and(|msg| msg.contains("database is locked"))
    );
}

#[tokio::test]
async fn cancelled_request_reports_unknown_status() {
    let ctx = setup_context(seeded_snapshot());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let response = ctx
        .state
        .sync_status_handler
        .get_sync_status_with_cancel(request("EVENT", "event_uid"), cancel)
        .await
        .expect("response");

    assert_eq!(response.status, DisplayStatus::Unknown);
    assert_eq!(response.failure.as_deref(), Some("Operation cancelled"));
}

#[tokio::test]
async fn repeated_requests_produce_equal_views() {
    let ctx = setup_context(seeded_snapshot());
    let scope = SyncScope::simple(
        ScopeType::Program,
        ScopeId::new("program_uid".into()).expect("scope id"),
    )
    .expect("scope");

    let first = ctx.state.sync_status_service.build_view(&scope).await.expect("view");
    let second = ctx.state.sync_status_service.build_view(&scope).await.expect("view");

    assert_eq!(first, second);
}

#[tokio::test]
async fn data_values_scope_from_json_snapshot() {
    let json = r#"{
        "smsCapable": true,
        "scopes": {
            "data_set_uid|org_unit|attr|202001": { "states": ["PENDING_UPDATE"] }
        }
    }"#;
    let store = granular_sync_lib::infrastructure::SnapshotSyncStore::from_json(json)
        .expect("snapshot json");
    let state = granular_sync_lib::AppState::with_store(
        granular_sync_lib::AppConfig::default(),
        std::sync::Arc::new(store),
    )
    .expect("app state");

    let mut req = request("DATA_VALUES", "data_set_uid");
    req.organisation_unit = Some("org_unit".into());
    req.attribute_option_combo = Some("attr".into());
    req.period = Some("202001".into());

    let response = state
        .sync_status_handler
        .get_sync_status(req)
        .await
        .expect("response");

    assert_eq!(response.status, DisplayStatus::HasLocalChanges);
    assert!(response.sms_offered);
}

#[tokio::test]
async fn replaced_snapshot_is_visible_to_next_view() {
    let ctx = setup_context(seeded_snapshot());
    let scope = SyncScope::simple(
        ScopeType::Event,
        ScopeId::new("event_uid".into()).expect("scope id"),
    )
    .expect("scope");

    let before = ctx.state.sync_status_service.build_view(&scope).await.expect("view");
    assert_eq!(before.state, SyncState::Error);
    assert_eq!(before.errors.len(), 3);
    assert!(before.sms_offered);

    let mut resynced = SyncSnapshot::default();
    resynced.scopes.insert(
        "event_uid".into(),
        ScopeSnapshot {
            title: Some("Antenatal care visit".into()),
            states: vec![SyncState::Synced],
            completions: Vec::new(),
        },
    );
    ctx.store.replace(resynced).await;

    let after = ctx.state.sync_status_service.build_view(&scope).await.expect("view");
    assert_eq!(after.state, SyncState::Synced);
    assert!(after.errors.is_empty());
    assert!(!after.sms_offered);
    assert_eq!(after.title.as_deref(), Some("Antenatal care visit"));
}
