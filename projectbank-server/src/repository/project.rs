//! Project Repository
//!
//! Handles all database operations related to projects.

use projectbank_core::domain::project::Project;
use projectbank_core::dto::project::{CreateProject, ProjectSummary};
use sqlx::PgPool;

/// Create a new project in the database
pub async fn create(pool: &PgPool, req: &CreateProject) -> Result<Project, sqlx::Error> {
    let row: (i32,) = sqlx::query_as(
        r#"
        INSERT INTO projects (name, description, author_id)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(&req.name)
    .bind(&req.description)
    .bind(req.author_id)
    .fetch_one(pool)
    .await?;

    Ok(Project {
        id: row.0,
        name: req.name.clone(),
        description: req.description.clone(),
        author_id: req.author_id,
    })
}

/// Find a project by ID
pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Project>, sqlx::Error> {
    let row = sqlx::query_as::<_, ProjectRow>(
        r#"
        SELECT id, name, description, author_id
        FROM projects
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// List all projects as simplified summaries
pub async fn list_all(pool: &PgPool) -> Result<Vec<ProjectSummary>, sqlx::Error> {
    let rows = sqlx::query_as::<_, SummaryRow>(
        r#"
        SELECT id, name
        FROM projects
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// List projects created by a given author
pub async fn list_by_author(pool: &PgPool, author_id: i32) -> Result<Vec<ProjectSummary>, sqlx::Error> {
    let rows = sqlx::query_as::<_, SummaryRow>(
        r#"
        SELECT id, name
        FROM projects
        WHERE author_id = $1
        ORDER BY id
        "#,
    )
    .bind(author_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// Delete a project by ID
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: i32,
    name: String,
    description: String,
    author_id: i32,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            name: row.name,
            description: row.description,
            author_id: row.author_id,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id: i32,
    name: String,
}

impl From<SummaryRow> for ProjectSummary {
    fn from(row: SummaryRow) -> Self {
        ProjectSummary {
            id: row.id,
            name: row.name,
        }
    }
}
