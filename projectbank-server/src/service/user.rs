//! User Service
//!
//! Read-only user lookups.

use projectbank_core::dto::user::UserDto;
use sqlx::PgPool;

use crate::repository::user_repository;

/// Service error type
#[derive(Debug)]
pub enum UserError {
    NotFound(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for UserError {
    fn from(err: sqlx::Error) -> Self {
        UserError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, UserError>;

/// Look up a user by email
pub async fn user_by_email(pool: &PgPool, email: &str) -> Result<UserDto> {
    let user = user_repository::find_by_email(pool, email)
        .await?
        .ok_or_else(|| UserError::NotFound(email.to_string()))?;

    Ok(UserDto {
        id: user.id,
        name: user.name,
        is_supervisor: user.is_supervisor,
        email: user.email,
    })
}
