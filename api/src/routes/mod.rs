//! Route handlers, grouped by resource.

use signet_core::repositories::{SessionRepository, UserRepository};
use signet_core::services::auth::AuthService;
use signet_core::services::email::Mailer;

pub mod health;
pub mod session;
pub mod user;

/// Application state shared across handlers.
///
/// Generic over the repository and mailer implementations so integration
/// tests can assemble the app with in-memory collaborators.
pub struct AppState<U, S, M>
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    M: Mailer + 'static,
{
    pub auth_service: AuthService<U, S, M>,
}
