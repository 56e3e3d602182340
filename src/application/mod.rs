pub mod ports;
pub mod services;

pub use services::SyncStatusService;
