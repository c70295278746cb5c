use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use pmo_dashboard::workflows::prioritization::{
    CriteriaCatalog, PageId, PageScope, PrioritizationRecord, ProfileDirectory, RecordId,
    RecordRepository, RepositoryError, ScoringEngine, UserProfile, UserRole,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// The page identifier the deployed matrix lives under; page-admin grants
/// are checked against it.
pub(crate) fn matrix_page() -> PageId {
    PageId("prioritization-matrix".to_string())
}

pub(crate) fn scoring_engine() -> ScoringEngine {
    ScoringEngine::new(CriteriaCatalog::standard())
}

/// BTreeMap keyed on the sortable record id keeps `list` in creation order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryRecordRepository {
    records: Arc<Mutex<BTreeMap<RecordId, PrioritizationRecord>>>,
}

impl RecordRepository for InMemoryRecordRepository {
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

/// Stand-in for the campus identity service until SSO integration lands.
#[derive(Clone)]
pub(crate) struct StaticProfileDirectory {
    profiles: Vec<UserProfile>,
}

impl Default for StaticProfileDirectory {
    fn default() -> Self {
        Self {
            profiles: vec![
                UserProfile {
                    identity: "dean".to_string(),
                    role: UserRole::Administrator,
                    allowed_pages: vec![PageScope::AllPages],
                },
                UserProfile {
                    identity: "pmo-officer".to_string(),
                    role: UserRole::PmoStaff,
                    allowed_pages: vec![PageScope::Page(matrix_page())],
                },
                UserProfile {
                    identity: "prof-ibrahim".to_string(),
                    role: UserRole::Faculty,
                    allowed_pages: vec![PageScope::Page(matrix_page())],
                },
                UserProfile {
                    identity: "amina".to_string(),
                    role: UserRole::Student,
                    allowed_pages: vec![PageScope::Page(matrix_page())],
                },
            ],
        }
    }
}

impl ProfileDirectory for StaticProfileDirectory {
    fn profile(&self, identity: &str) -> Option<UserProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.identity == identity)
            .cloned()
    }
}
