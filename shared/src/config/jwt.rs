//! JWT signing configuration.
//!
//! Key material is asymmetric (RS256) and looked up by logical name from the
//! environment as base64-encoded PEM documents. Access and refresh tokens use
//! distinct key pairs.

use serde::{Deserialize, Serialize};

/// Default access token lifetime: 15 minutes.
pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;

/// Default refresh token lifetime: 31 days.
pub const DEFAULT_REFRESH_TOKEN_TTL_SECS: i64 = 31 * 24 * 60 * 60;

/// JWT configuration: base64-encoded PEM key pairs plus expiry policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Base64-encoded PEM private key for signing access tokens
    pub access_token_private_key: String,

    /// Base64-encoded PEM public key for verifying access tokens
    pub access_token_public_key: String,

    /// Base64-encoded PEM private key for signing refresh tokens
    pub refresh_token_private_key: String,

    /// Base64-encoded PEM public key for verifying refresh tokens
    pub refresh_token_public_key: String,

    /// Access token expiry in seconds
    pub access_token_ttl_secs: i64,

    /// Refresh token expiry in seconds
    pub refresh_token_ttl_secs: i64,
}

impl JwtConfig {
    /// Create from environment variables.
    ///
    /// Reads `ACCESS_TOKEN_PRIVATE_KEY`, `ACCESS_TOKEN_PUBLIC_KEY`,
    /// `REFRESH_TOKEN_PRIVATE_KEY`, `REFRESH_TOKEN_PUBLIC_KEY` (base64 PEM)
    /// and optional `ACCESS_TOKEN_TTL_SECS` / `REFRESH_TOKEN_TTL_SECS`.
    pub fn from_env() -> Self {
        Self {
            access_token_private_key: std::env::var("ACCESS_TOKEN_PRIVATE_KEY")
                .unwrap_or_default(),
            access_token_public_key: std::env::var("ACCESS_TOKEN_PUBLIC_KEY")
                .unwrap_or_default(),
            refresh_token_private_key: std::env::var("REFRESH_TOKEN_PRIVATE_KEY")
                .unwrap_or_default(),
            refresh_token_public_key: std::env::var("REFRESH_TOKEN_PUBLIC_KEY")
                .unwrap_or_default(),
            access_token_ttl_secs: std::env::var("ACCESS_TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_ACCESS_TOKEN_TTL_SECS),
            refresh_token_ttl_secs: std::env::var("REFRESH_TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REFRESH_TOKEN_TTL_SECS),
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_ttl_minutes(mut self, minutes: i64) -> Self {
        self.access_token_ttl_secs = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_ttl_days(mut self, days: i64) -> Self {
        self.refresh_token_ttl_secs = days * 86400;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_builders() {
        let config = JwtConfig {
            access_token_private_key: String::new(),
            access_token_public_key: String::new(),
            refresh_token_private_key: String::new(),
            refresh_token_public_key: String::new(),
            access_token_ttl_secs: DEFAULT_ACCESS_TOKEN_TTL_SECS,
            refresh_token_ttl_secs: DEFAULT_REFRESH_TOKEN_TTL_SECS,
        }
        .with_access_ttl_minutes(30)
        .with_refresh_ttl_days(14);

        assert_eq!(config.access_token_ttl_secs, 1800);
        assert_eq!(config.refresh_token_ttl_secs, 1_209_600);
    }

    #[test]
    fn test_default_ttls() {
        assert_eq!(DEFAULT_ACCESS_TOKEN_TTL_SECS, 900);
        assert_eq!(DEFAULT_REFRESH_TOKEN_TTL_SECS, 2_678_400);
    }
}
