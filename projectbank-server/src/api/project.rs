//! Project API Handlers
//!
//! HTTP endpoints for project postings.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use projectbank_core::domain::response::Response;
use projectbank_core::dto::project::{CreateProject, ProjectDto, ProjectSummary};
use serde::Deserialize;
use sqlx::PgPool;

use crate::api::error::{ApiError, ApiResult};
use crate::service::project_service;

/// Query parameters for GET /projects
#[derive(Deserialize)]
pub struct ProjectListQuery {
    pub author: Option<i32>,
}

/// GET /projects
/// List all projects, or only those by an author when `?author={id}` is given
pub async fn list_projects(
    State(pool): State<PgPool>,
    Query(params): Query<ProjectListQuery>,
) -> ApiResult<Json<Vec<ProjectSummary>>> {
    let projects = match params.author {
        Some(author_id) => {
            tracing::debug!("Listing projects by author: {}", author_id);
            project_service::list_by_author(&pool, author_id).await
        }
        None => {
            tracing::debug!("Listing all projects");
            project_service::list_projects(&pool).await
        }
    }
    .map_err(map_project_error)?;

    Ok(Json(projects))
}

/// GET /projects/{id}
/// Get project by ID
pub async fn get_project(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ProjectDto>> {
    tracing::debug!("Getting project: {}", id);

    let project = project_service::get_project(&pool, id)
        .await
        .map_err(map_project_error)?;

    Ok(Json(project))
}

/// POST /projects
/// Create a new project
pub async fn create_project(
    State(pool): State<PgPool>,
    Json(req): Json<CreateProject>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    tracing::info!("Creating project: {}", req.name);

    let (_, project) = project_service::create_project(&pool, req)
        .await
        .map_err(map_project_error)?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// DELETE /projects/{id}
/// Delete a project along with its applications and views
pub async fn delete_project(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    tracing::info!("Deleting project: {}", id);

    let response = project_service::delete_project(&pool, id)
        .await
        .map_err(map_project_error)?;

    if response == Response::Deleted {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound(format!("Project {} not found", id)))
    }
}

fn map_project_error(e: project_service::ProjectError) -> ApiError {
    match e {
        project_service::ProjectError::NotFound(id) => {
            ApiError::NotFound(format!("Project {} not found", id))
        }
        project_service::ProjectError::ValidationError(msg) => ApiError::BadRequest(msg),
        project_service::ProjectError::DatabaseError(err) => ApiError::DatabaseError(err),
    }
}
