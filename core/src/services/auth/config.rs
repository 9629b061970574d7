//! Configuration for the authentication workflow service.

use signet_shared::config::jwt::{
    DEFAULT_ACCESS_TOKEN_TTL_SECS, DEFAULT_REFRESH_TOKEN_TTL_SECS,
};

/// Expiry policy and sender identity for the authentication workflows.
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Access token lifetime in seconds
    pub access_token_ttl_secs: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_ttl_secs: i64,
    /// Base URL used when composing verification and reset emails
    pub public_base_url: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            access_token_ttl_secs: DEFAULT_ACCESS_TOKEN_TTL_SECS,
            refresh_token_ttl_secs: DEFAULT_REFRESH_TOKEN_TTL_SECS,
            public_base_url: "http://localhost:1337".to_string(),
        }
    }
}
