pub mod sync_status_handler;

pub use sync_status_handler::SyncStatusHandler;
