//! Core domain types
//!
//! This module contains the core domain structures used across ProjectBank
//! services. These types represent the fundamental business entities and are
//! shared between the server (for persistence) and the client.

pub mod applicant;
pub mod project;
pub mod response;
pub mod user;
pub mod view;
