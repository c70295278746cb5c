use super::common::*;
use crate::workflows::prioritization::domain::{
    PriorityLevel, RecordId, RecordStatus, UserRole, Viewer,
};
use crate::workflows::prioritization::lifecycle::AuthorizationError;
use crate::workflows::prioritization::repository::{RecordRepository, RepositoryError};
use crate::workflows::prioritization::scoring::ValidationError;
use crate::workflows::prioritization::service::{PrioritizationService, ServiceError};
use std::sync::Arc;

#[test]
fn submit_always_creates_a_draft() {
    let (service, _) = build_service();

    // Even the most privileged submitter starts in Draft.
    let by_admin = service
        .submit(submission("Chiller replacement"), "dean")
        .expect("valid submission");
    let by_student = service
        .submit(submission("Library lighting"), "amina")
        .expect("valid submission");

    assert_eq!(by_admin.record_status, RecordStatus::Draft);
    assert_eq!(by_student.record_status, RecordStatus::Draft);
    assert_eq!(by_admin.total_weighted_score, 4.15);
    assert_eq!(by_admin.priority_level, PriorityLevel::High);
    assert_eq!(by_admin.date_created, by_admin.last_modified);
}

#[test]
fn record_ids_sort_by_creation_order() {
    let (service, _) = build_service();

    let first = service
        .submit(submission("First"), "amina")
        .expect("valid submission");
    let second = service
        .submit(submission("Second"), "amina")
        .expect("valid submission");

    assert!(first.id < second.id);
}

#[test]
fn submit_rejects_invalid_ratings_without_storing() {
    let (service, repository) = build_service();

    let mut bad = submission("Broken");
    bad.criteria_scores.insert(
        crate::workflows::prioritization::domain::CriterionId::new("safety"),
        9,
    );

    match service.submit(bad, "amina") {
        Err(ServiceError::Validation(ValidationError::RatingOutOfRange { .. })) => {}
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(repository.list().expect("list succeeds").is_empty());
}

#[test]
fn edit_rescores_and_preserves_status_and_provenance() {
    let (service, repository) = build_service();

    let created = service
        .submit(submission("Roof repair"), "amina")
        .expect("valid submission");

    let mut revised = submission("Roof repair (revised)");
    revised.operational_status = "Under Review".to_string();
    revised.criteria_scores = uniform_ratings(2);

    let updated = service
        .edit(&created.id, revised, false)
        .expect("edit succeeds");

    assert_eq!(updated.record_status, RecordStatus::Draft);
    assert_eq!(updated.submitted_by, "amina");
    assert_eq!(updated.date_created, created.date_created);
    assert!(updated.last_modified >= created.last_modified);
    assert_eq!(updated.title, "Roof repair (revised)");
    assert_eq!(updated.operational_status, "Under Review");
    assert_eq!(updated.total_weighted_score, 2.0);
    assert_eq!(updated.priority_level, PriorityLevel::Low);

    let stored = repository
        .fetch(&created.id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored, updated);
}

#[test]
fn edit_by_admin_still_preserves_published_status() {
    let (service, _) = build_service();

    let created = service
        .submit(submission("Lab ventilation"), "amina")
        .expect("valid submission");
    let published = service
        .approve(&created.id, true)
        .expect("admin approval succeeds");
    assert_eq!(published.record_status, RecordStatus::Published);

    // Status changes only through the explicit approve transition, never as
    // an edit side effect.
    let edited = service
        .edit(&created.id, submission("Lab ventilation"), true)
        .expect("edit succeeds");
    assert_eq!(edited.record_status, RecordStatus::Published);
}

#[test]
fn approve_denial_leaves_stored_record_untouched() {
    let (service, repository) = build_service();

    let created = service
        .submit(submission("Stairwell signage"), "amina")
        .expect("valid submission");

    match service.approve(&created.id, false) {
        Err(ServiceError::Authorization(AuthorizationError::ApproveDenied)) => {}
        other => panic!("expected approval denial, got {other:?}"),
    }

    let stored = repository
        .fetch(&created.id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.record_status, RecordStatus::Draft);
    assert_eq!(stored.last_modified, created.last_modified);
}

#[test]
fn approve_is_idempotent_for_admins() {
    let (service, _) = build_service();

    let created = service
        .submit(submission("Generator overhaul"), "amina")
        .expect("valid submission");

    let first = service.approve(&created.id, true).expect("first approval");
    let second = service.approve(&created.id, true).expect("re-approval");

    assert_eq!(first.record_status, RecordStatus::Published);
    assert_eq!(second, first);
}

#[test]
fn delete_requires_administrator() {
    let (service, repository) = build_service();

    let created = service
        .submit(submission("Parking lot repaving"), "amina")
        .expect("valid submission");

    match service.delete(&created.id, UserRole::PmoStaff) {
        Err(ServiceError::Authorization(AuthorizationError::DeleteDenied { actor_role })) => {
            assert_eq!(actor_role, UserRole::PmoStaff);
        }
        other => panic!("expected delete denial, got {other:?}"),
    }
    assert!(repository
        .fetch(&created.id)
        .expect("fetch succeeds")
        .is_some());

    service
        .delete(&created.id, UserRole::Administrator)
        .expect("administrator can delete");
    assert!(repository
        .fetch(&created.id)
        .expect("fetch succeeds")
        .is_none());
}

#[test]
fn visible_applies_the_three_tier_filter_over_the_store() {
    let (service, _) = build_service();

    let draft = service
        .submit(submission("Draft by amina"), "amina")
        .expect("valid submission");
    let to_publish = service
        .submit(submission("Published item"), "bilal")
        .expect("valid submission");
    service
        .approve(&to_publish.id, true)
        .expect("admin approval succeeds");

    let anonymous = service
        .visible(&Viewer::anonymous())
        .expect("list succeeds");
    assert_eq!(anonymous.len(), 1);
    assert_eq!(anonymous[0].id, to_publish.id);

    let owner = service
        .visible(&Viewer::authenticated("amina", false))
        .expect("list succeeds");
    assert_eq!(owner.len(), 2);
    assert!(owner.iter().any(|record| record.id == draft.id));

    let admin = service
        .visible(&Viewer::authenticated("dean", true))
        .expect("list succeeds");
    assert_eq!(admin.len(), 2);
}

#[test]
fn get_propagates_not_found() {
    let (service, _) = build_service();

    match service.get(&RecordId("rec-missing".to_string())) {
        Err(ServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn repository_failures_surface_as_service_errors() {
    let service = PrioritizationService::new(Arc::new(UnavailableRepository), engine());

    match service.submit(submission("Anything"), "amina") {
        Err(ServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable error, got {other:?}"),
    }
}
