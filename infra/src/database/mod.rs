//! Database module - MySQL implementations using SQLx
//!
//! Connection pool management plus repository implementations for the
//! user and session collections.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::{MySqlSessionRepository, MySqlUserRepository};
