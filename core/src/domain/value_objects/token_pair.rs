//! Token pair returned to the client on login.

use serde::{Deserialize, Serialize};

/// Access + refresh token pair issued by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived JWT proving identity for a single request window
    pub access_token: String,

    /// Long-lived JWT referencing the session created by this login
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
