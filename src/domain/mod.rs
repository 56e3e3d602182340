pub mod entities;
pub mod sync_status;
pub mod value_objects;

pub use entities::{CompletionRecord, ErrorRecord, ScopeTarget, SyncScope, SyncStatusView};
pub use value_objects::{ErrorSourceKind, ScopeId, ScopeType, SyncState};
