//! Application API Handlers
//!
//! HTTP endpoints for project applications.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use projectbank_core::domain::response::Response;
use projectbank_core::dto::application::Application;
use projectbank_core::dto::project::ProjectSummary;
use sqlx::PgPool;

use crate::api::error::{ApiError, ApiResult};
use crate::service::applicant_service;

/// POST /projects/{id}/apply
/// Apply a student to a project
pub async fn apply_for_project(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(req): Json<Application>,
) -> ApiResult<StatusCode> {
    tracing::info!("Application to project {} by student {}", id, req.student_id);

    let response = applicant_service::apply_to_project(&pool, id, req.student_id).await?;

    match response {
        Response::Created => Ok(StatusCode::CREATED),
        _ => Err(ApiError::Conflict(format!(
            "Student {} already applied to project {}",
            req.student_id, id
        ))),
    }
}

/// GET /projects/{id}/applications
/// Get the number of applications for a project
pub async fn get_applications(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> ApiResult<Json<i64>> {
    tracing::debug!("Counting applications for project: {}", id);

    let count = applicant_service::count_applications(&pool, id).await?;

    Ok(Json(count))
}

/// GET /projects/{id}/applications/{student_id}
/// Check whether a student has applied to a project
pub async fn is_applied(
    State(pool): State<PgPool>,
    Path((id, student_id)): Path<(i32, i32)>,
) -> ApiResult<Json<bool>> {
    tracing::debug!(
        "Checking application to project {} by student {}",
        id,
        student_id
    );

    let response = applicant_service::has_applied(&pool, id, student_id).await?;

    Ok(Json(response == Response::Exists))
}

/// DELETE /projects/{id}/applications
/// Delete all applications for a project
pub async fn delete_applications(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    tracing::info!("Deleting applications for project: {}", id);

    let response = applicant_service::delete_applications(&pool, id).await?;

    if response == Response::Deleted {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound(format!(
            "No applications found for project {}",
            id
        )))
    }
}

/// GET /students/{id}/applications
/// List the projects a student has applied to
pub async fn applied_projects(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Vec<ProjectSummary>>> {
    tracing::debug!("Listing applied projects for student: {}", id);

    let projects = applicant_service::applied_projects(&pool, id).await?;

    Ok(Json(projects))
}
