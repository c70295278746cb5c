use chrono::Utc;

use super::domain::{PrioritizationRecord, RecordStatus, UserRole};

/// Rejected privileged action. The stored record is never touched on denial.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthorizationError {
    #[error("Only authorized admins can approve records.")]
    ApproveDenied,
    #[error("Access denied. Admin privileges required.")]
    DeleteDenied { actor_role: UserRole },
}

/// Advance a Draft record to Published. Page admins only. Approving an
/// already-Published record is a no-op, not an error. There is no reverse
/// transition; unpublish does not exist.
pub fn approve(
    record: PrioritizationRecord,
    actor_is_page_admin: bool,
) -> Result<PrioritizationRecord, AuthorizationError> {
    if !actor_is_page_admin {
        return Err(AuthorizationError::ApproveDenied);
    }

    match record.record_status {
        RecordStatus::Published => Ok(record),
        RecordStatus::Draft => Ok(PrioritizationRecord {
            record_status: RecordStatus::Published,
            last_modified: Utc::now(),
            ..record
        }),
    }
}

/// Deletion is reserved for the most-privileged role.
pub fn authorize_delete(actor_role: UserRole) -> Result<(), AuthorizationError> {
    match actor_role {
        UserRole::Administrator => Ok(()),
        other => Err(AuthorizationError::DeleteDenied { actor_role: other }),
    }
}
