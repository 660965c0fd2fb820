//! View API Handlers
//!
//! HTTP endpoints for project view records.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use projectbank_core::domain::response::Response;
use projectbank_core::dto::application::Application;
use sqlx::PgPool;

use crate::api::error::{ApiError, ApiResult};
use crate::service::view_service;

/// POST /projects/{id}/views
/// Record a view of a project by a student
pub async fn add_view(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(req): Json<Application>,
) -> ApiResult<StatusCode> {
    tracing::debug!("View of project {} by student {}", id, req.student_id);

    let response = view_service::add_view(&pool, id, req.student_id).await?;

    match response {
        Response::Created => Ok(StatusCode::CREATED),
        _ => Err(ApiError::Conflict(format!(
            "View of project {} by student {} already recorded",
            id, req.student_id
        ))),
    }
}

/// GET /projects/{id}/views
/// Get the number of recorded views for a project
pub async fn get_views(State(pool): State<PgPool>, Path(id): Path<i32>) -> ApiResult<Json<i64>> {
    tracing::debug!("Counting views for project: {}", id);

    let count = view_service::count_views(&pool, id).await?;

    Ok(Json(count))
}

/// DELETE /projects/{id}/views
/// Delete all views for a project
pub async fn delete_views(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    tracing::info!("Deleting views for project: {}", id);

    let response = view_service::delete_views(&pool, id).await?;

    if response == Response::Deleted {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound(format!(
            "No views found for project {}",
            id
        )))
    }
}
