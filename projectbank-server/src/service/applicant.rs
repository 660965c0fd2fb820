//! Applicant Service
//!
//! Business logic for project applications: duplicate detection, applied
//! listings, counts, and the bulk delete used by the project cascade.

use projectbank_core::domain::response::Response;
use projectbank_core::dto::project::ProjectSummary;
use sqlx::PgPool;

use super::{bulk_delete_outcome, insert_outcome, lookup_outcome};
use crate::repository::applicant_repository;

/// Apply a student to a project
///
/// Returns `Conflict` when the student already applied, `Created` otherwise.
/// The duplicate check and the insert are one atomic statement, so a
/// concurrent duplicate apply resolves to `Conflict` rather than an error.
pub async fn apply_to_project(
    pool: &PgPool,
    project_id: i32,
    student_id: i32,
) -> Result<Response, sqlx::Error> {
    let inserted = applicant_repository::insert(pool, project_id, student_id).await?;

    if inserted {
        tracing::info!("Student {} applied to project {}", student_id, project_id);
    }

    Ok(insert_outcome(inserted))
}

/// Check whether a student has applied to a project
///
/// Pure lookup: returns `Exists` or `NotFound`, never mutates.
pub async fn has_applied(
    pool: &PgPool,
    project_id: i32,
    student_id: i32,
) -> Result<Response, sqlx::Error> {
    let found = applicant_repository::exists(pool, project_id, student_id).await?;
    Ok(lookup_outcome(found))
}

/// List the projects a student has applied to
pub async fn applied_projects(
    pool: &PgPool,
    student_id: i32,
) -> Result<Vec<ProjectSummary>, sqlx::Error> {
    applicant_repository::list_applied(pool, student_id).await
}

/// Count the applications for a project
pub async fn count_applications(pool: &PgPool, project_id: i32) -> Result<i64, sqlx::Error> {
    applicant_repository::count_for_project(pool, project_id).await
}

/// Delete all applications for a project
///
/// Returns `NotFound` when no rows matched, `Deleted` otherwise.
pub async fn delete_applications(
    pool: &PgPool,
    project_id: i32,
) -> Result<Response, sqlx::Error> {
    let removed = applicant_repository::delete_for_project(pool, project_id).await?;

    if removed > 0 {
        tracing::info!(
            "Deleted {} applications for project {}",
            removed,
            project_id
        );
    }

    Ok(bulk_delete_outcome(removed))
}
