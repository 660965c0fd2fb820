//! Project domain types

use serde::{Deserialize, Serialize};

/// A project posting created by a supervisor
///
/// Structure shared between the server (persists) and the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub author_id: i32,
}

/// Maximum length of a project name
pub const MAX_NAME_LEN: usize = 50;

/// Maximum length of a project description
pub const MAX_DESCRIPTION_LEN: usize = 500;
