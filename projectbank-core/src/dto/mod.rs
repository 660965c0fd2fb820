//! Data Transfer Objects for the HTTP API
//!
//! This module contains DTOs exchanged between the ProjectBank server and
//! its clients. DTOs are lightweight projections of domain entities
//! optimized for network transfer.

pub mod application;
pub mod project;
pub mod user;
