//! Service Module
//!
//! Business logic layer for the server: the facade over the repositories.
//! Services own validation, the Response outcome mapping, and the explicit
//! delete cascade that keeps applicants and views free of orphans.

pub mod applicant;
pub mod project;
pub mod user;
pub mod view;

// Re-export for convenience
pub use applicant as applicant_service;
pub use project as project_service;
pub use user as user_service;
pub use view as view_service;

use projectbank_core::domain::response::Response;

// =============================================================================
// Outcome Mapping
// =============================================================================

// Applications and views share these decisions: both are rows keyed on
// (project_id, student_id) with conflict-on-duplicate inserts and
// not-found-on-empty bulk deletes.

/// Outcome of a keyed insert: touching no row means the pair already existed
pub(crate) fn insert_outcome(inserted: bool) -> Response {
    if inserted {
        Response::Created
    } else {
        Response::Conflict
    }
}

/// Outcome of a pure existence lookup
pub(crate) fn lookup_outcome(found: bool) -> Response {
    if found {
        Response::Exists
    } else {
        Response::NotFound
    }
}

/// Outcome of a bulk delete
pub(crate) fn bulk_delete_outcome(rows_removed: u64) -> Response {
    if rows_removed == 0 {
        Response::NotFound
    } else {
        Response::Deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_insert_is_created() {
        assert_eq!(insert_outcome(true), Response::Created);
    }

    #[test]
    fn test_duplicate_insert_is_conflict() {
        assert_eq!(insert_outcome(false), Response::Conflict);
    }

    #[test]
    fn test_lookup_reports_exists_for_present_pair() {
        assert_eq!(lookup_outcome(true), Response::Exists);
    }

    #[test]
    fn test_lookup_reports_not_found_for_absent_pair() {
        assert_eq!(lookup_outcome(false), Response::NotFound);
    }

    #[test]
    fn test_bulk_delete_with_no_rows_is_not_found() {
        assert_eq!(bulk_delete_outcome(0), Response::NotFound);
    }

    #[test]
    fn test_bulk_delete_with_rows_is_deleted() {
        assert_eq!(bulk_delete_outcome(3), Response::Deleted);
    }
}
