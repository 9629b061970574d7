//! Session repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::session::Session;
use crate::errors::DomainError;

/// Repository trait for Session persistence.
///
/// Sessions are created only on successful login. There is no deletion;
/// revocation is the `valid` flag flipped by `invalidate`.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session
    async fn create(&self, session: Session) -> Result<Session, DomainError>;

    /// Find a session by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Session>, DomainError>;

    /// Flip the session's validity flag to false
    ///
    /// # Returns
    /// * `Ok(true)` - Session was valid and is now invalid
    /// * `Ok(false)` - No session with the given id, or it was already invalid
    async fn invalidate(&self, id: Uuid) -> Result<bool, DomainError>;
}
