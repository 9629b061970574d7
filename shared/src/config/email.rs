//! Outbound email (SMTP) configuration

use serde::{Deserialize, Serialize};

/// SMTP transport configuration for the mailer
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP relay port
    pub smtp_port: u16,

    /// SMTP username
    pub smtp_user: String,

    /// SMTP password
    pub smtp_pass: String,

    /// Address used in the `From` header of every outbound message
    pub from_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::from("localhost"),
            smtp_port: 587,
            smtp_user: String::new(),
            smtp_pass: String::new(),
            from_address: String::from("no-reply@signet.local"),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables (`SMTP_HOST`, `SMTP_PORT`,
    /// `SMTP_USER`, `SMTP_PASS`, `EMAIL_FROM`)
    pub fn from_env() -> Self {
        Self {
            smtp_host: std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            smtp_user: std::env::var("SMTP_USER").unwrap_or_default(),
            smtp_pass: std::env::var("SMTP_PASS").unwrap_or_default(),
            from_address: std::env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "no-reply@signet.local".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_config_default() {
        let config = EmailConfig::default();
        assert_eq!(config.smtp_port, 587);
        assert!(config.from_address.contains('@'));
    }
}
