pub mod snapshot_store;

pub use snapshot_store::{ScopeSnapshot, SnapshotSyncStore, SyncSnapshot, snapshot_key};
