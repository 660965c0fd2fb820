//! View Repository
//!
//! Handles all database operations related to project view records.

use sqlx::PgPool;

/// Insert a view row unless the pair is already present
///
/// Returns whether a row was inserted. Same atomic shape as the applicant
/// insert: concurrent duplicate views resolve to a conflict, not an error.
pub async fn insert(pool: &PgPool, project_id: i32, student_id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO views (project_id, student_id)
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

/// Get the view count for a project
pub async fn count_for_project(pool: &PgPool, project_id: i32) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(
        r#"
        SELECT COUNT(*) FROM views WHERE project_id = $1
        "#,
    )
    .bind(project_id)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}

/// Delete all views for a project, returning the number of rows removed
pub async fn delete_for_project(pool: &PgPool, project_id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM views WHERE project_id = $1")
        .bind(project_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
