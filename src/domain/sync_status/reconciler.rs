use crate::domain::entities::CompletionRecord;
use crate::domain::value_objects::SyncState;

/// Collapse the states of every local record in a scope into one status.
///
/// Candidates and completion records are merged into a single multiset and the
/// most severe state wins. An empty input means there is nothing left to send,
/// which is reported as [`SyncState::Synced`]. Pending creates are reported as
/// pending updates: the user only cares that local changes exist.
pub fn reconcile(candidates: &[SyncState], completions: &[CompletionRecord]) -> SyncState {
    candidates
        .iter()
        .copied()
        .chain(completions.iter().map(CompletionRecord::effective_state))
        .max()
        .map(user_facing)
        .unwrap_or(SyncState::Synced)
}

fn user_facing(state: SyncState) -> SyncState {
    match state {
        SyncState::PendingCreate => SyncState::PendingUpdate,
        other => other,
    }
}
