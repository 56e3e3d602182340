use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// Sync state of a local record, ordered by severity.
///
/// `Error > PendingUpdate > PendingCreate > Synced`. Ordering goes through
/// [`SyncState::rank`] so merging a set of states is a single `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncState {
    Synced,
    PendingCreate,
    PendingUpdate,
    Error,
}

impl SyncState {
    pub const ALL: [SyncState; 4] = [
        SyncState::Synced,
        SyncState::PendingCreate,
        SyncState::PendingUpdate,
        SyncState::Error,
    ];

    pub fn rank(&self) -> u8 {
        match self {
            SyncState::Synced => 0,
            SyncState::PendingCreate => 1,
            SyncState::PendingUpdate => 2,
            SyncState::Error => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncState::Synced => "SYNCED",
            SyncState::PendingCreate => "PENDING_CREATE",
            SyncState::PendingUpdate => "PENDING_UPDATE",
            SyncState::Error => "ERROR",
        }
    }

    pub fn has_local_changes(&self) -> bool {
        matches!(self, SyncState::PendingCreate | SyncState::PendingUpdate)
    }
}

impl Ord for SyncState {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for SyncState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
