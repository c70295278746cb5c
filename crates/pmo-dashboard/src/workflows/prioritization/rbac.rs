use super::domain::{PageId, PageScope, UserProfile, UserRole};

/// Session collaborator resolving an identity to its profile. Implemented by
/// the host application; the core only consumes it.
pub trait ProfileDirectory: Send + Sync {
    fn profile(&self, identity: &str) -> Option<UserProfile>;
}

/// Roles that can hold page-admin standing when granted a specific page.
const PRIVILEGED_ROLES: [UserRole; 2] = [UserRole::Administrator, UserRole::PmoStaff];

/// Whether the profile administers the given matrix page: an `AllPages`
/// grant is sufficient on its own, a scoped page grant also needs a
/// privileged role.
pub fn is_page_admin(profile: &UserProfile, page: &PageId) -> bool {
    let mut has_page_grant = false;
    for scope in &profile.allowed_pages {
        match scope {
            PageScope::AllPages => return true,
            PageScope::Page(granted) if granted == page => has_page_grant = true,
            PageScope::Page(_) => {}
        }
    }

    has_page_grant && PRIVILEGED_ROLES.contains(&profile.role)
}
