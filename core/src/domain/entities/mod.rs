//! Domain entities

pub mod session;
pub mod token;
pub mod user;

pub use session::Session;
pub use token::{AccessClaims, RefreshClaims};
pub use user::User;
