pub mod completion_record;
pub mod error_record;
pub mod raw_error;
pub mod sync_scope;
pub mod sync_status_view;

pub use completion_record::CompletionRecord;
pub use error_record::{ErrorRecord, INTEGRITY_ERROR_CODE};
pub use raw_error::{ImportConflictItem, ImportStatus, IntegrityViolationItem, ServerErrorItem};
pub use sync_scope::{ScopeTarget, SyncScope};
pub use sync_status_view::SyncStatusView;
