//! User API Handlers
//!
//! HTTP endpoints for user lookups.

use axum::{
    Json,
    extract::{Query, State},
};
use projectbank_core::dto::user::UserDto;
use serde::Deserialize;
use sqlx::PgPool;

use crate::api::error::{ApiError, ApiResult};
use crate::service::user_service;

/// Query parameters for GET /users
#[derive(Deserialize)]
pub struct UserQuery {
    pub email: String,
}

/// GET /users?email={email}
/// Look up a user by email
pub async fn get_by_email(
    State(pool): State<PgPool>,
    Query(params): Query<UserQuery>,
) -> ApiResult<Json<UserDto>> {
    tracing::debug!("Looking up user by email: {}", params.email);

    let user = user_service::user_by_email(&pool, &params.email)
        .await
        .map_err(|e| match e {
            user_service::UserError::NotFound(email) => {
                ApiError::NotFound(format!("No user with email {}", email))
            }
            user_service::UserError::DatabaseError(err) => ApiError::DatabaseError(err),
        })?;

    Ok(Json(user))
}
