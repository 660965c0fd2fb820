//! Operation outcome codes

use serde::{Deserialize, Serialize};

/// Outcome of a data-access operation
///
/// Every mutating operation maps its result onto exactly one variant; the
/// API layer translates these into HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// A new row was inserted
    Created,
    /// The row already existed, nothing was inserted
    Conflict,
    /// One or more rows were removed
    Deleted,
    /// No matching row exists
    NotFound,
    /// A matching row exists (pure lookup, no mutation)
    Exists,
}
