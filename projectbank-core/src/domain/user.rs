//! User domain types

use serde::{Deserialize, Serialize};

/// A platform user, either a supervisor or a student
///
/// Read-only reference entity: users are looked up, never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub is_supervisor: bool,
}
