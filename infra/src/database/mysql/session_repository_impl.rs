//! MySQL implementation of the SessionRepository trait.
//!
//! Sessions live in the `user_sessions` table. Revocation is an UPDATE of
//! the `valid` flag; rows are never deleted.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use signet_core::domain::entities::session::Session;
use signet_core::errors::DomainError;
use signet_core::repositories::SessionRepository;

/// MySQL implementation of SessionRepository
pub struct MySqlSessionRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlSessionRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Session entity
    fn row_to_session(row: &sqlx::mysql::MySqlRow) -> Result<Session, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Database {
            message: format!("Failed to get user_id: {}", e),
        })?;

        Ok(Session {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            valid: row.try_get("valid").map_err(|e| DomainError::Database {
                message: format!("Failed to get valid: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl SessionRepository for MySqlSessionRepository {
    async fn create(&self, session: Session) -> Result<Session, DomainError> {
        let query = r#"
            INSERT INTO user_sessions (id, user_id, valid, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(session.id.to_string())
            .bind(session.user_id.to_string())
            .bind(session.valid)
            .bind(session.created_at)
            .bind(session.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create session: {}", e),
            })?;

        Ok(session)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Session>, DomainError> {
        let query = r#"
            SELECT id, user_id, valid, created_at, updated_at
            FROM user_sessions
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_session(&row)?)),
            None => Ok(None),
        }
    }

    async fn invalidate(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE user_sessions
            SET valid = FALSE, updated_at = NOW()
            WHERE id = ? AND valid = TRUE
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to invalidate session: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
