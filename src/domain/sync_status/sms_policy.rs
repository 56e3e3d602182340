use crate::domain::value_objects::ScopeType;

/// Whether the SMS transport may be offered for a scope.
///
/// SMS payloads are size-constrained, so only single records or a single
/// data-value batch qualify. A device without SMS capability never qualifies.
pub fn is_offered(scope_type: ScopeType, device_capable: bool) -> bool {
    if !device_capable {
        return false;
    }
    matches!(
        scope_type,
        ScopeType::TrackedEntity | ScopeType::Event | ScopeType::DataValues
    )
}
