//! HTTP API layer.
//!
//! Thin boundary over the core auth workflow: DTO validation, header
//! extraction, error-to-status mapping and route registration. Exported as
//! a library so integration tests can assemble the app with mock
//! collaborators.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
