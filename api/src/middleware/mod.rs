//! HTTP middleware

pub mod auth;
pub mod cors;

pub use auth::{CurrentUser, DeserializeUser};
pub use cors::create_cors;
