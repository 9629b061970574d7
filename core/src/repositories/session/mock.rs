//! Mock implementation of SessionRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::session::Session;
use crate::errors::DomainError;

use super::trait_::SessionRepository;

/// In-memory session repository for testing
pub struct MockSessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl MockSessionRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn create(&self, session: Session) -> Result<Session, DomainError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Session>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&id).cloned())
    }

    async fn invalidate(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&id) {
            Some(session) if session.valid => {
                session.invalidate();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MockSessionRepository::new();
        let session = Session::new(Uuid::new_v4());
        let id = session.id;

        repo.create(session).await.unwrap();

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert!(found.valid);
    }

    #[tokio::test]
    async fn test_invalidate() {
        let repo = MockSessionRepository::new();
        let session = Session::new(Uuid::new_v4());
        let id = session.id;
        repo.create(session).await.unwrap();

        assert!(repo.invalidate(id).await.unwrap());
        assert!(!repo.find_by_id(id).await.unwrap().unwrap().valid);

        assert!(!repo.invalidate(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_invalidate_already_invalid_session() {
        let repo = MockSessionRepository::new();
        let session = Session::new(Uuid::new_v4());
        let id = session.id;
        repo.create(session).await.unwrap();

        assert!(repo.invalidate(id).await.unwrap());
        assert!(!repo.invalidate(id).await.unwrap());
    }
}
