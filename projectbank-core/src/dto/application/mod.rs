//! Application DTOs

use serde::{Deserialize, Serialize};

/// Request body for applying to a project or recording a view
///
/// The project id comes from the URL path; only the acting student is
/// carried in the body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Application {
    pub student_id: i32,
}
