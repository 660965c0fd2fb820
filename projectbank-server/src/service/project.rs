//! Project Service
//!
//! Business logic for project postings, including the cascading delete that
//! removes a project's applications and views before the project row itself.

use projectbank_core::domain::project::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
use projectbank_core::domain::response::Response;
use projectbank_core::dto::project::{CreateProject, ProjectDto, ProjectSummary};
use sqlx::PgPool;

use crate::repository::{applicant_repository, project_repository, view_repository};

/// Service error type
#[derive(Debug)]
pub enum ProjectError {
    NotFound(i32),
    ValidationError(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for ProjectError {
    fn from(err: sqlx::Error) -> Self {
        ProjectError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, ProjectError>;

/// Create a new project posting
pub async fn create_project(pool: &PgPool, req: CreateProject) -> Result<(Response, ProjectDto)> {
    // Validate request
    validate_project_request(&req)?;

    // Create project in database
    let project = project_repository::create(pool, &req).await?;

    tracing::info!("Project created: {} ({})", project.name, project.id);

    Ok((Response::Created, project.into()))
}

/// Get a project by ID
pub async fn get_project(pool: &PgPool, id: i32) -> Result<ProjectDto> {
    let project = project_repository::find_by_id(pool, id)
        .await?
        .ok_or(ProjectError::NotFound(id))?;

    Ok(project.into())
}

/// List all projects
pub async fn list_projects(pool: &PgPool) -> Result<Vec<ProjectSummary>> {
    let projects = project_repository::list_all(pool).await?;
    Ok(projects)
}

/// List projects created by a given author
pub async fn list_by_author(pool: &PgPool, author_id: i32) -> Result<Vec<ProjectSummary>> {
    let projects = project_repository::list_by_author(pool, author_id).await?;
    Ok(projects)
}

/// Delete a project and everything that references it
///
/// Applications and views carry no FK cascade, so they are removed
/// explicitly before the project row.
pub async fn delete_project(pool: &PgPool, id: i32) -> Result<Response> {
    applicant_repository::delete_for_project(pool, id).await?;
    view_repository::delete_for_project(pool, id).await?;

    let deleted = project_repository::delete(pool, id).await?;

    if !deleted {
        return Ok(Response::NotFound);
    }

    tracing::info!("Project deleted: {}", id);

    Ok(Response::Deleted)
}

// =============================================================================
// Validation
// =============================================================================

fn validate_project_request(req: &CreateProject) -> Result<()> {
    if req.name.trim().is_empty() {
        return Err(ProjectError::ValidationError(
            "Project name cannot be empty".to_string(),
        ));
    }

    if req.name.len() > MAX_NAME_LEN {
        return Err(ProjectError::ValidationError(format!(
            "Project name is too long (max {} characters)",
            MAX_NAME_LEN
        )));
    }

    if req.description.trim().is_empty() {
        return Err(ProjectError::ValidationError(
            "Project description cannot be empty".to_string(),
        ));
    }

    if req.description.len() > MAX_DESCRIPTION_LEN {
        return Err(ProjectError::ValidationError(format!(
            "Project description is too long (max {} characters)",
            MAX_DESCRIPTION_LEN
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, description: &str) -> CreateProject {
        CreateProject {
            name: name.to_string(),
            description: description.to_string(),
            author_id: 1,
        }
    }

    #[test]
    fn test_validate_empty_name() {
        let req = request("", "Body of project");

        let result = validate_project_request(&req);
        assert!(matches!(result, Err(ProjectError::ValidationError(_))));
    }

    #[test]
    fn test_validate_name_too_long() {
        let req = request(&"x".repeat(MAX_NAME_LEN + 1), "Body of project");

        let result = validate_project_request(&req);
        assert!(matches!(result, Err(ProjectError::ValidationError(_))));
    }

    #[test]
    fn test_validate_empty_description() {
        let req = request("Project", "   ");

        let result = validate_project_request(&req);
        assert!(matches!(result, Err(ProjectError::ValidationError(_))));
    }

    #[test]
    fn test_validate_description_too_long() {
        let req = request("Project", &"x".repeat(MAX_DESCRIPTION_LEN + 1));

        let result = validate_project_request(&req);
        assert!(matches!(result, Err(ProjectError::ValidationError(_))));
    }

    #[test]
    fn test_validate_valid_request() {
        let req = request("Project", "Body of project");

        let result = validate_project_request(&req);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_accepts_boundary_lengths() {
        let req = request(&"x".repeat(MAX_NAME_LEN), &"x".repeat(MAX_DESCRIPTION_LEN));

        let result = validate_project_request(&req);
        assert!(result.is_ok());
    }
}
