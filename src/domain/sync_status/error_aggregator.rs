use crate::domain::entities::{
    ErrorRecord, ImportConflictItem, IntegrityViolationItem, ServerErrorItem,
};
use crate::domain::value_objects::ErrorSourceKind;
use crate::shared::config::{DEFAULT_INTEGRITY_TEMPLATE, ErrorReportingConfig};

/// Normalizes the three error sources into one list for the status dialog.
///
/// Groups are emitted in fixed order: server responses, referential integrity
/// violations, import conflicts. Only records inside a group are sorted, newest
/// first; equal timestamps keep their input order. Nothing is dropped.
#[derive(Debug, Clone)]
pub struct ErrorAggregator {
    integrity_template: String,
}

impl ErrorAggregator {
    pub fn new(integrity_template: impl Into<String>) -> Self {
        Self {
            integrity_template: integrity_template.into(),
        }
    }

    pub fn from_config(config: &ErrorReportingConfig) -> Self {
        Self::new(config.integrity_description_template.clone())
    }

    pub fn aggregate(
        &self,
        server_errors: &[ServerErrorItem],
        integrity_violations: &[IntegrityViolationItem],
        import_conflicts: &[ImportConflictItem],
    ) -> Vec<ErrorRecord> {
        let mut groups = [
            (
                ErrorSourceKind::ImportConflict,
                newest_first(import_conflicts.iter().map(ErrorRecord::from_import_conflict)),
            ),
            (
                ErrorSourceKind::ReferentialIntegrity,
                newest_first(integrity_violations.iter().map(|item| {
                    ErrorRecord::from_integrity_violation(item, &self.integrity_template)
                })),
            ),
            (
                ErrorSourceKind::ServerResponse,
                newest_first(server_errors.iter().map(ErrorRecord::from_server_error)),
            ),
        ];
        groups.sort_by_key(|(kind, _)| kind.priority());

        groups.into_iter().flat_map(|(_, group)| group).collect()
    }
}

impl Default for ErrorAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_INTEGRITY_TEMPLATE)
    }
}

fn newest_first(records: impl Iterator<Item = ErrorRecord>) -> Vec<ErrorRecord> {
    let mut group: Vec<ErrorRecord> = records.collect();
    // sort_by は安定ソート
    group.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    group
}
