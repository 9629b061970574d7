//! Repository interfaces for persisted collections.
//!
//! Traits define the persistence contract; concrete implementations live in
//! `signet_infra` (MySQL) and in the in-memory mocks used by tests.

pub mod session;
pub mod user;

pub use session::{MockSessionRepository, SessionRepository};
pub use user::{MockUserRepository, UserRepository, UserStore};
