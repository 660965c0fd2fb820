//! View domain types

use serde::{Deserialize, Serialize};

/// A recorded view of a project by a student
///
/// The pair `(project_id, student_id)` is the primary key; repeat views by
/// the same student are not counted twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub project_id: i32,
    pub student_id: i32,
}
