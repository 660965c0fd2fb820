//! Applicant domain types

use serde::{Deserialize, Serialize};

/// A single application by a student to a project
///
/// The pair `(project_id, student_id)` is the primary key, so a student can
/// apply to a given project at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub project_id: i32,
    pub student_id: i32,
}
