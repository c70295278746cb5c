use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{
    PrioritizationRecord, RecordId, RecordStatus, RecordSubmission, UserRole, Viewer,
};
use super::lifecycle::{self, AuthorizationError};
use super::repository::{RecordRepository, RepositoryError};
use super::scoring::{ScoringEngine, ValidationError};
use super::visibility::visible_records;

static RECORD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Zero-padded so lexicographic order matches creation order.
fn next_record_id() -> RecordId {
    let id = RECORD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RecordId(format!("rec-{id:06}"))
}

/// Service composing the scoring engine, lifecycle rules, and repository.
pub struct PrioritizationService<R> {
    engine: Arc<ScoringEngine>,
    repository: Arc<R>,
}

impl<R> PrioritizationService<R>
where
    R: RecordRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: ScoringEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            repository,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Create a record from a submission. New records always land in Draft,
    /// whoever submits them.
    pub fn submit(
        &self,
        submission: RecordSubmission,
        submitted_by: impl Into<String>,
    ) -> Result<PrioritizationRecord, ServiceError> {
        let breakdown = self.engine.score(&submission.criteria_scores)?;
        let now = Utc::now();

        let record = PrioritizationRecord {
            id: next_record_id(),
            title: submission.title,
            description: submission.description,
            operational_status: submission.operational_status,
            criteria_scores: submission.criteria_scores,
            weighted_scores: breakdown.weighted_scores,
            total_weighted_score: breakdown.total_weighted_score,
            priority_level: breakdown.priority_level,
            record_status: RecordStatus::Draft,
            submitted_by: submitted_by.into(),
            date_created: now,
            last_modified: now,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Rescore and rewrite the authored fields of an existing record.
    /// Publication status, submitter, and creation time carry forward
    /// untouched; a plain edit never flips Draft/Published, admin or not.
    pub fn edit(
        &self,
        id: &RecordId,
        submission: RecordSubmission,
        _editor_is_page_admin: bool,
    ) -> Result<PrioritizationRecord, ServiceError> {
        let existing = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        let breakdown = self.engine.score(&submission.criteria_scores)?;

        let updated = PrioritizationRecord {
            id: existing.id.clone(),
            title: submission.title,
            description: submission.description,
            operational_status: submission.operational_status,
            criteria_scores: submission.criteria_scores,
            weighted_scores: breakdown.weighted_scores,
            total_weighted_score: breakdown.total_weighted_score,
            priority_level: breakdown.priority_level,
            record_status: existing.record_status,
            submitted_by: existing.submitted_by,
            date_created: existing.date_created,
            last_modified: Utc::now(),
        };

        self.repository.update(updated.clone())?;
        Ok(updated)
    }

    /// Advance a Draft record to Published; page admins only.
    pub fn approve(
        &self,
        id: &RecordId,
        actor_is_page_admin: bool,
    ) -> Result<PrioritizationRecord, ServiceError> {
        let existing = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let approved = lifecycle::approve(existing, actor_is_page_admin)?;
        self.repository.update(approved.clone())?;
        Ok(approved)
    }

    /// Remove a record; Administrator only.
    pub fn delete(&self, id: &RecordId, actor_role: UserRole) -> Result<(), ServiceError> {
        lifecycle::authorize_delete(actor_role)?;
        self.repository.delete(id)?;
        Ok(())
    }

    /// Fetch a single record for detail responses.
    pub fn get(&self, id: &RecordId) -> Result<PrioritizationRecord, ServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// All records the viewer may see, in creation order.
    pub fn visible(&self, viewer: &Viewer) -> Result<Vec<PrioritizationRecord>, ServiceError> {
        let all = self.repository.list()?;
        Ok(visible_records(&all, viewer)
            .into_iter()
            .cloned()
            .collect())
    }
}

/// Error raised by the prioritization service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
