//! Prioritization matrix: weighted multi-criteria scoring, the
//! Draft/Published record lifecycle, and the permission-gated visibility
//! filter that decides which records a viewer sees.

pub mod catalog;
pub mod domain;
pub mod lifecycle;
pub mod rbac;
pub mod repository;
pub mod router;
pub(crate) mod scoring;
pub mod service;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, CriteriaCatalog};
pub use domain::{
    Criterion, CriterionId, PageId, PageScope, PrioritizationRecord, PriorityLevel, RecordId,
    RecordStatus, RecordSubmission, UserProfile, UserRole, Viewer,
};
pub use lifecycle::AuthorizationError;
pub use rbac::{is_page_admin, ProfileDirectory};
pub use repository::{RecordRepository, RecordView, RepositoryError};
pub use router::{matrix_router, MatrixState};
pub use scoring::{ScoreBreakdown, ScoringEngine, ValidationError};
pub use service::{PrioritizationService, ServiceError};
pub use visibility::visible_records;
