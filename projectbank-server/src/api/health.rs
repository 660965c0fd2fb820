//! Health Check API Handler
//!
//! Liveness endpoint for deployment probes.

use axum::{http::StatusCode, response::IntoResponse};

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
