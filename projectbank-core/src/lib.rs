//! ProjectBank Core
//!
//! Core types and abstractions for the ProjectBank platform.
//!
//! This crate contains:
//! - Domain types: Core business entities (Project, User, Applicant, View)
//! - DTOs: Data transfer objects exchanged over the HTTP API

pub mod domain;
pub mod dto;
