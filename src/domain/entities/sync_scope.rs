use crate::domain::value_objects::{ScopeId, ScopeType};
use serde::{Deserialize, Serialize};

/// Type-specific part of a scope. Only data-value batches need more than an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScopeTarget {
    Everything,
    Program,
    Dataset,
    TrackedEntity,
    Event,
    #[serde(rename_all = "camelCase")]
    DataValues {
        organisation_unit: String,
        attribute_option_combo: String,
        period: String,
    },
}

impl ScopeTarget {
    pub fn scope_type(&self) -> ScopeType {
        match self {
            ScopeTarget::Everything => ScopeType::Everything,
            ScopeTarget::Program => ScopeType::Program,
            ScopeTarget::Dataset => ScopeType::Dataset,
            ScopeTarget::TrackedEntity => ScopeType::TrackedEntity,
            ScopeTarget::Event => ScopeType::Event,
            ScopeTarget::DataValues { .. } => ScopeType::DataValues,
        }
    }
}

/// A validated request for the sync status of one scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncScope {
    pub scope_id: ScopeId,
    pub target: ScopeTarget,
}

impl SyncScope {
    pub fn new(scope_id: ScopeId, target: ScopeTarget) -> Self {
        Self { scope_id, target }
    }

    /// Builds a scope for every type that needs no auxiliary identifiers.
    pub fn simple(scope_type: ScopeType, scope_id: ScopeId) -> Result<Self, String> {
        let target = match scope_type {
            ScopeType::Everything => ScopeTarget::Everything,
            ScopeType::Program => ScopeTarget::Program,
            ScopeType::Dataset => ScopeTarget::Dataset,
            ScopeType::TrackedEntity => ScopeTarget::TrackedEntity,
            ScopeType::Event => ScopeTarget::Event,
            ScopeType::DataValues => {
                return Err(
                    "Data values scope requires organisation unit, attribute option combo and period"
                        .to_string(),
                );
            }
        };
        Ok(Self::new(scope_id, target))
    }

    pub fn data_values(
        scope_id: ScopeId,
        organisation_unit: String,
        attribute_option_combo: String,
        period: String,
    ) -> Result<Self, String> {
        for (name, value) in [
            ("Organisation unit", &organisation_unit),
            ("Attribute option combo", &attribute_option_combo),
            ("Period", &period),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{name} cannot be empty"));
            }
        }
        Ok(Self::new(
            scope_id,
            ScopeTarget::DataValues {
                organisation_unit,
                attribute_option_combo,
                period,
            },
        ))
    }

    pub fn scope_type(&self) -> ScopeType {
        self.target.scope_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> ScopeId {
        ScopeId::new("scope_uid".into()).unwrap()
    }

    #[test]
    fn test_simple_scope_maps_type() {
        for scope_type in ScopeType::ALL {
            if scope_type == ScopeType::DataValues {
                continue;
            }
            let scope = SyncScope::simple(scope_type, id()).unwrap();
            assert_eq!(scope.scope_type(), scope_type);
        }
    }

    #[test]
    fn test_simple_scope_rejects_data_values() {
        assert!(SyncScope::simple(ScopeType::DataValues, id()).is_err());
    }

    #[test]
    fn test_data_values_requires_all_identifiers() {
        let err = SyncScope::data_values(id(), "org_unit".into(), " ".into(), "202001".into())
            .unwrap_err();
        assert!(err.contains("Attribute option combo"));

        let scope =
            SyncScope::data_values(id(), "org_unit".into(), "attr".into(), "202001".into())
                .unwrap();
        assert_eq!(scope.scope_type(), ScopeType::DataValues);
    }
}
