use serde::Serialize;

use super::domain::{PrioritizationRecord, RecordId};

/// Storage abstraction so the service can be exercised without a real store.
/// `list` returns records in creation order; implementations keyed on the
/// sortable record id get that for free.
pub trait RecordRepository: Send + Sync {
    fn insert(&self, record: PrioritizationRecord)
        -> Result<PrioritizationRecord, RepositoryError>;
    fn update(&self, record: PrioritizationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &RecordId) -> Result<Option<PrioritizationRecord>, RepositoryError>;
    fn delete(&self, id: &RecordId) -> Result<(), RepositoryError>;
    fn list(&self) -> Result<Vec<PrioritizationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of a record for list/detail responses.
#[derive(Debug, Clone, Serialize)]
pub struct RecordView {
    pub id: RecordId,
    pub title: String,
    pub operational_status: String,
    pub total_weighted_score: f64,
    pub priority_level: &'static str,
    pub record_status: &'static str,
    pub submitted_by: String,
}

impl RecordView {
    pub fn from_record(record: &PrioritizationRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            operational_status: record.operational_status.clone(),
            total_weighted_score: record.total_weighted_score,
            priority_level: record.priority_level.label(),
            record_status: record.record_status.label(),
            submitted_by: record.submitted_by.clone(),
        }
    }
}
