//! Session entity: a revocable login record referenced by refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted session created as a side effect of a successful login.
///
/// The session does not own the user; `user_id` is a non-owning reference
/// used for lookup. A session with `valid == false` must never yield a new
/// access token from refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for the session
    pub id: Uuid,

    /// Reference to the user this session belongs to
    pub user_id: Uuid,

    /// Revocation flag; flipped to false on logout or administrative action
    pub valid: bool,

    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the session was last updated
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new valid session for a user
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            valid: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the session as invalid
    pub fn invalidate(&mut self) {
        self.valid = false;
        self.updated_at = Utc::now();
    }
}
