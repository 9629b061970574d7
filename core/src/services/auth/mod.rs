//! Authentication workflow module.
//!
//! Orchestrates login, token refresh, registration, email verification and
//! password reset on top of the user store, session repository, token codec
//! and mailer.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::{AuthService, NewUser};
