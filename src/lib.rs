//! Sync status reconciliation for an offline-first data collection client.
//!
//! Given a scope (a program, a dataset, a tracked entity, an event, a data-value
//! batch or everything), [`SyncStatusService`] collects local record states,
//! error logs and the device SMS capability from its ports and answers with a
//! [`SyncStatusView`]: one aggregate state, the ordered error list and whether the
//! SMS transport may be offered.
//!
//! [`SyncStatusService`]: application::services::SyncStatusService
//! [`SyncStatusView`]: domain::entities::SyncStatusView

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod state;

pub use application::services::{SyncStatusService, SyncStatusServiceTrait};
pub use domain::entities::{CompletionRecord, ErrorRecord, ScopeTarget, SyncScope, SyncStatusView};
pub use domain::value_objects::{ErrorSourceKind, ScopeId, ScopeType, SyncState};
pub use shared::{AppConfig, AppError, Result, init_logging};
pub use state::AppState;
