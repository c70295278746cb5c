use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};

use crate::workflows::prioritization::catalog::CriteriaCatalog;
use crate::workflows::prioritization::domain::{
    CriterionId, PageId, PageScope, PrioritizationRecord, PriorityLevel, RecordId, RecordStatus,
    RecordSubmission, UserProfile, UserRole,
};
use crate::workflows::prioritization::rbac::ProfileDirectory;
use crate::workflows::prioritization::repository::{
    RecordRepository, RepositoryError,
};
use crate::workflows::prioritization::router::{matrix_router, MatrixState};
use crate::workflows::prioritization::scoring::ScoringEngine;
use crate::workflows::prioritization::service::PrioritizationService;

pub(super) fn matrix_page() -> PageId {
    PageId("prioritization-matrix".to_string())
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(CriteriaCatalog::standard())
}

/// The worked example from the PMO data: weighted sum 4.15, High priority.
pub(super) fn high_priority_ratings() -> BTreeMap<CriterionId, u8> {
    ratings([
        ("safety", 4),
        ("functionality", 5),
        ("frequency", 5),
        ("beneficiaries", 4),
        ("cost", 3),
        ("strategic", 4),
        ("disaster", 2),
    ])
}

pub(super) fn ratings<const N: usize>(entries: [(&str, u8); N]) -> BTreeMap<CriterionId, u8> {
    entries
        .into_iter()
        .map(|(id, rating)| (CriterionId::new(id), rating))
        .collect()
}

pub(super) fn uniform_ratings(rating: u8) -> BTreeMap<CriterionId, u8> {
    CriteriaCatalog::standard()
        .criteria()
        .iter()
        .map(|criterion| (criterion.id.clone(), rating))
        .collect()
}

pub(super) fn submission(title: &str) -> RecordSubmission {
    RecordSubmission {
        title: title.to_string(),
        description: "Replace the failed chiller serving the science wing.".to_string(),
        operational_status: "Planning".to_string(),
        criteria_scores: high_priority_ratings(),
    }
}

pub(super) fn record(id: &str, status: RecordStatus, submitted_by: &str) -> PrioritizationRecord {
    let created = Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).single().expect("valid timestamp");
    PrioritizationRecord {
        id: RecordId(format!("rec-{id}")),
        title: format!("Request {id}"),
        description: "Fixture record".to_string(),
        operational_status: "Planning".to_string(),
        criteria_scores: high_priority_ratings(),
        weighted_scores: BTreeMap::new(),
        total_weighted_score: 4.15,
        priority_level: PriorityLevel::High,
        record_status: status,
        submitted_by: submitted_by.to_string(),
        date_created: created,
        last_modified: created,
    }
}

pub(super) fn admin_profile(identity: &str) -> UserProfile {
    UserProfile {
        identity: identity.to_string(),
        role: UserRole::Administrator,
        allowed_pages: vec![PageScope::AllPages],
    }
}

pub(super) fn staff_profile(identity: &str) -> UserProfile {
    UserProfile {
        identity: identity.to_string(),
        role: UserRole::PmoStaff,
        allowed_pages: vec![PageScope::Page(matrix_page())],
    }
}

pub(super) fn student_profile(identity: &str) -> UserProfile {
    UserProfile {
        identity: identity.to_string(),
        role: UserRole::Student,
        allowed_pages: vec![PageScope::Page(matrix_page())],
    }
}

pub(super) fn build_service() -> (
    PrioritizationService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = PrioritizationService::new(repository.clone(), engine());
    (service, repository)
}

pub(super) fn build_router() -> axum::Router {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(PrioritizationService::new(repository, engine()));
    matrix_router(MatrixState {
        service,
        profiles: Arc::new(StaticProfiles::default()),
        page: matrix_page(),
    })
}

/// In-memory repository keyed on the sortable record id, so `list` comes
/// back in creation order.
#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<BTreeMap<RecordId, PrioritizationRecord>>>,
}

impl RecordRepository for MemoryRepository {
    fn insert(
        &self,
        record: PrioritizationRecord,
    ) -> Result<PrioritizationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: PrioritizationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<PrioritizationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn delete(&self, id: &RecordId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }

    fn list(&self) -> Result<Vec<PrioritizationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

/// Directory with one profile per role, keyed by identity.
#[derive(Clone)]
pub(super) struct StaticProfiles {
    profiles: Vec<UserProfile>,
}

impl Default for StaticProfiles {
    fn default() -> Self {
        Self {
            profiles: vec![
                admin_profile("dean"),
                staff_profile("pmo-officer"),
                student_profile("amina"),
            ],
        }
    }
}

impl ProfileDirectory for StaticProfiles {
    fn profile(&self, identity: &str) -> Option<UserProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.identity == identity)
            .cloned()
    }
}

pub(super) struct UnavailableRepository;

impl RecordRepository for UnavailableRepository {
    fn insert(
        &self,
        _record: PrioritizationRecord,
    ) -> Result<PrioritizationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update(&self, _record: PrioritizationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &RecordId) -> Result<Option<PrioritizationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn delete(&self, _id: &RecordId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn list(&self) -> Result<Vec<PrioritizationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}
