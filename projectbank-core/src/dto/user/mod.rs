//! User DTOs

use serde::{Deserialize, Serialize};

/// Read projection of a user, returned by email lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub is_supervisor: bool,
    pub email: String,
}
