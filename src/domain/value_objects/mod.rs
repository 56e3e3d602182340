pub mod error_source_kind;
pub mod scope_id;
pub mod scope_type;
pub mod sync_state;

pub use error_source_kind::ErrorSourceKind;
pub use scope_id::ScopeId;
pub use scope_type::ScopeType;
pub use sync_state::SyncState;
