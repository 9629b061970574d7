//! # Infrastructure Layer
//!
//! Concrete implementations behind the core's persistence and delivery
//! traits:
//! - **Database**: MySQL repositories for users and sessions, via SQLx
//! - **Email**: SMTP delivery via lettre, plus a mock for development

pub mod database;
pub mod email;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email transport error
    #[error("Email transport error: {0}")]
    Email(String),
}
