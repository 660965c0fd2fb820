//! View Service
//!
//! Business logic for project view records. Mirrors the applicant service:
//! one row per (project, student) pair, same conflict and delete semantics.

use projectbank_core::domain::response::Response;
use sqlx::PgPool;

use super::{bulk_delete_outcome, insert_outcome};
use crate::repository::view_repository;

/// Record a view of a project by a student
///
/// Returns `Conflict` when the pair is already recorded, `Created` otherwise.
/// As with applications, the insert is atomic under concurrent duplicates.
pub async fn add_view(
    pool: &PgPool,
    project_id: i32,
    student_id: i32,
) -> Result<Response, sqlx::Error> {
    let inserted = view_repository::insert(pool, project_id, student_id).await?;

    if inserted {
        tracing::debug!("Student {} viewed project {}", student_id, project_id);
    }

    Ok(insert_outcome(inserted))
}

/// Count the recorded views for a project
pub async fn count_views(pool: &PgPool, project_id: i32) -> Result<i64, sqlx::Error> {
    view_repository::count_for_project(pool, project_id).await
}

/// Delete all views for a project
///
/// Returns `NotFound` when no rows matched, `Deleted` otherwise.
pub async fn delete_views(pool: &PgPool, project_id: i32) -> Result<Response, sqlx::Error> {
    let removed = view_repository::delete_for_project(pool, project_id).await?;

    if removed > 0 {
        tracing::info!("Deleted {} views for project {}", removed, project_id);
    }

    Ok(bulk_delete_outcome(removed))
}
