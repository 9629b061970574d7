//! Process configuration assembled from the environment.

use signet_shared::config::{
    DatabaseConfig, EmailConfig, Environment, JwtConfig, ServerConfig,
};

/// Everything the API process needs, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
    pub jwt: JwtConfig,
    /// Base URL clients reach this service on; used in outbound email links
    pub public_base_url: String,
}

impl Config {
    /// Load from environment variables; `.env` loading is the caller's job
    pub fn from_env() -> Self {
        let server = ServerConfig::from_env();
        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://{}", server.bind_address()));

        Self {
            environment: Environment::from_env(),
            server,
            database: DatabaseConfig::from_env(),
            email: EmailConfig::from_env(),
            jwt: JwtConfig::from_env(),
            public_base_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_base_url_defaults_to_bind_address() {
        // No PUBLIC_BASE_URL in a clean test environment
        std::env::remove_var("PUBLIC_BASE_URL");
        let config = Config::from_env();
        assert!(config.public_base_url.starts_with("http://"));
    }
}
