pub mod sync_status_service;

pub use sync_status_service::{SyncStatusService, SyncStatusServiceTrait};
