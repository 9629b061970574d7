//! JWT claims for access and refresh tokens.
//!
//! Access claims carry the user's public profile; building them from a
//! `User` strips the private fields (password, verification code, reset
//! code, verified flag) so the codec never sees them. Refresh claims carry
//! only the session id.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Claims embedded in an access token: the user's public profile plus the
/// standard registered claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user id)
    pub sub: String,

    /// Email address
    pub email: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Middle name, when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    /// Nickname, when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Account update timestamp
    pub updated_at: DateTime<Utc>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID
    pub jti: String,
}

impl AccessClaims {
    /// Builds access claims from a user, excluding every private field.
    pub fn from_user(user: &User, ttl_secs: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_secs);

        Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            middle_name: user.middle_name.clone(),
            nick_name: user.nick_name.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Parses the subject as a user id
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Claims embedded in a refresh token; the only payload is the session id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject (session id)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID
    pub jti: String,
}

impl RefreshClaims {
    /// Creates refresh claims for a session
    pub fn new(session_id: Uuid, ttl_secs: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_secs);

        Self {
            sub: session_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Parses the subject as a session id
    pub fn session_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}
