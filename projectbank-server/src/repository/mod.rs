//! Repository Module
//!
//! Data access layer for the server.
//! Each repository handles database operations for a specific domain entity.

pub mod applicant;
pub mod project;
pub mod user;
pub mod view;

// Re-export for convenience
pub use applicant as applicant_repository;
pub use project as project_repository;
pub use user as user_repository;
pub use view as view_repository;
