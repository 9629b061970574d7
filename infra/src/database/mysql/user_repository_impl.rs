//! MySQL implementation of the UserRepository trait.
//!
//! The `users` table carries a unique index on `email`; a violation on
//! insert is surfaced as `AuthError::AlreadyExists`, which keeps the
//! uniqueness constraint a store concern rather than a workflow one.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use signet_core::domain::entities::user::User;
use signet_core::errors::{AuthError, DomainError};
use signet_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

const USER_COLUMNS: &str = "id, email, first_name, last_name, middle_name, nick_name, \
     password, verification_code, password_reset_code, verified, created_at, updated_at";

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?;
        let id = Uuid::parse_str(&id).map_err(|e| DomainError::Database {
            message: format!("Invalid UUID: {}", e),
        })?;

        Ok(User::hydrate(
            id,
            get(row, "email")?,
            get(row, "first_name")?,
            get(row, "last_name")?,
            get(row, "middle_name")?,
            get(row, "nick_name")?,
            get(row, "password")?,
            get(row, "verification_code")?,
            get(row, "password_reset_code")?,
            get(row, "verified")?,
            get::<DateTime<Utc>>(row, "created_at")?,
            get::<DateTime<Utc>>(row, "updated_at")?,
        ))
    }
}

fn get<'r, T>(row: &'r sqlx::mysql::MySqlRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(column).map_err(|e| DomainError::Database {
        message: format!("Failed to get {}: {}", column, e),
    })
}

/// Whether an insert failed on the unique email index
fn is_duplicate_key(error: &sqlx::Error) -> bool {
    matches!(
        error,
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23000")
    )
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE email = ? LIMIT 1",
            USER_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, email, first_name, last_name, middle_name, nick_name,
                password, verification_code, password_reset_code, verified,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.middle_name)
            .bind(&user.nick_name)
            .bind(&user.password)
            .bind(&user.verification_code)
            .bind(&user.password_reset_code)
            .bind(user.verified)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    DomainError::Auth(AuthError::AlreadyExists)
                } else {
                    DomainError::Database {
                        message: format!("Failed to create user: {}", e),
                    }
                }
            })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                email = ?, first_name = ?, last_name = ?, middle_name = ?,
                nick_name = ?, password = ?, verification_code = ?,
                password_reset_code = ?, verified = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.middle_name)
            .bind(&user.nick_name)
            .bind(&user.password)
            .bind(&user.verification_code)
            .bind(&user.password_reset_code)
            .bind(user.verified)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update user: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        Ok(user)
    }
}
