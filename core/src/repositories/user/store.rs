//! Store wrapper applying the password pre-persist hook.
//!
//! Every write to the user collection goes through this wrapper so that a
//! dirty password field is hashed exactly once before it reaches the
//! repository, and never re-hashed when unrelated fields change.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::services::password::PasswordHasher;

use super::trait_::UserRepository;

/// User store: repository access plus the before-persist password hook.
pub struct UserStore<R: UserRepository> {
    repository: Arc<R>,
    hasher: PasswordHasher,
}

impl<R: UserRepository> UserStore<R> {
    pub fn new(repository: Arc<R>, hasher: PasswordHasher) -> Self {
        Self { repository, hasher }
    }

    /// Find a user by case-normalized email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.repository.find_by_email(email).await
    }

    /// Find a user by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.repository.find_by_id(id).await
    }

    /// Persist a new user, hashing the password first
    pub async fn create(&self, mut user: User) -> Result<User, DomainError> {
        self.before_persist(&mut user)?;
        self.repository.create(user).await
    }

    /// Persist changes to a user, hashing the password only when it changed
    pub async fn update(&self, mut user: User) -> Result<User, DomainError> {
        self.before_persist(&mut user)?;
        self.repository.update(user).await
    }

    /// The pre-persist hook: hash iff the password field was modified.
    fn before_persist(&self, user: &mut User) -> Result<(), DomainError> {
        if user.password_is_dirty() {
            let hash = self.hasher.hash(&user.password)?;
            user.apply_password_hash(hash);
        }
        Ok(())
    }
}
