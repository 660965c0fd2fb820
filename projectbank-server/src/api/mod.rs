//! API Module
//!
//! HTTP API layer for the server.
//! Each submodule handles endpoints for a specific domain.

pub mod applicant;
pub mod error;
pub mod health;
pub mod project;
pub mod user;
pub mod view;

use axum::{
    Router,
    routing::{delete, get, post},
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

/// Create the main API router with all endpoints
pub fn create_router(pool: PgPool) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Project endpoints
        .route("/projects", get(project::list_projects))
        .route("/projects", post(project::create_project))
        .route("/projects/{id}", get(project::get_project))
        .route("/projects/{id}", delete(project::delete_project))
        // Application endpoints
        .route("/projects/{id}/apply", post(applicant::apply_for_project))
        .route(
            "/projects/{id}/applications",
            get(applicant::get_applications),
        )
        .route(
            "/projects/{id}/applications",
            delete(applicant::delete_applications),
        )
        .route(
            "/projects/{id}/applications/{student_id}",
            get(applicant::is_applied),
        )
        .route(
            "/students/{id}/applications",
            get(applicant::applied_projects),
        )
        // View endpoints
        .route("/projects/{id}/views", post(view::add_view))
        .route("/projects/{id}/views", get(view::get_views))
        .route("/projects/{id}/views", delete(view::delete_views))
        // User endpoints
        .route("/users", get(user::get_by_email))
        // Add state and middleware
        .with_state(pool)
        .layer(TraceLayer::new_for_http())
}
