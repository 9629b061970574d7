//! Request and response DTOs for the HTTP surface

pub mod auth;
pub mod user;
