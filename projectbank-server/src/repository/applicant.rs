//! Applicant Repository
//!
//! Handles all database operations related to project applications.

use projectbank_core::dto::project::ProjectSummary;
use sqlx::PgPool;

/// Check whether a student has an application row for a project
pub async fn exists(pool: &PgPool, project_id: i32, student_id: i32) -> Result<bool, sqlx::Error> {
    let row: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM applicants
            WHERE project_id = $1 AND student_id = $2
        )
        "#,
    )
    .bind(project_id)
    .bind(student_id)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}

/// Insert an application row unless the pair is already present
///
/// Returns whether a row was inserted. The duplicate check and the insert
/// are a single statement, so two concurrent applies cannot both succeed
/// and neither trips the composite-key unique violation.
pub async fn insert(pool: &PgPool, project_id: i32, student_id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO applicants (project_id, student_id)
        VALUES ($1, $2)
        ON CONFLICT (project_id, student_id) DO NOTHING
        "#,
    )
    .bind(project_id)
    .bind(student_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// List the projects a student has applied to
pub async fn list_applied(
    pool: &PgPool,
    student_id: i32,
) -> Result<Vec<ProjectSummary>, sqlx::Error> {
    let rows = sqlx::query_as::<_, AppliedRow>(
        r#"
        SELECT p.id, p.name
        FROM applicants a
        JOIN projects p ON p.id = a.project_id
        WHERE a.student_id = $1
        ORDER BY p.id
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// Get the application count for a project
pub async fn count_for_project(pool: &PgPool, project_id: i32) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(
        r#"
        SELECT COUNT(*) FROM applicants WHERE project_id = $1
        "#,
    )
    .bind(project_id)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}

/// Delete all applications for a project, returning the number of rows removed
pub async fn delete_for_project(pool: &PgPool, project_id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM applicants WHERE project_id = $1")
        .bind(project_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct AppliedRow {
    id: i32,
    name: String,
}

impl From<AppliedRow> for ProjectSummary {
    fn from(row: AppliedRow) -> Self {
        ProjectSummary {
            id: row.id,
            name: row.name,
        }
    }
}
