//! Mock Mailer implementation.
//!
//! Records messages and logs them instead of delivering, for development
//! environments without an SMTP relay and for integration tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use signet_core::errors::DomainError;
use signet_core::services::email::{EmailMessage, Mailer};

/// Mailer that captures messages instead of sending them.
#[derive(Clone)]
pub struct MockMailer {
    /// Every message handed to `send`, in order
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print message bodies to the console
    console_output: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            simulate_failure,
            console_output,
        }
    }

    /// Number of messages captured so far
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// All captured messages, in send order
    pub fn messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// The most recent captured message
    pub fn last_message(&self) -> Option<EmailMessage> {
        self.sent.lock().unwrap().last().cloned()
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), DomainError> {
        if self.simulate_failure {
            warn!(to = %message.to, "mock mailer simulating delivery failure");
            return Err(DomainError::Internal {
                message: "Simulated email delivery failure".to_string(),
            });
        }

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK MAILER - MESSAGE #{}", self.sent_count() + 1);
            println!("To: {}", message.to);
            println!("Subject: {}", message.subject);
            println!("{}", message.text);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "mailer",
            provider = "mock",
            to = %message.to,
            subject = %message.subject,
            "email captured (mock)"
        );

        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_mailer_captures_messages() {
        let mailer = MockMailer::with_options(false, false);

        mailer
            .send(EmailMessage::new("a@x.com", "Hi", "body"))
            .await
            .unwrap();

        assert_eq!(mailer.sent_count(), 1);
        assert_eq!(mailer.last_message().unwrap().subject, "Hi");
    }

    #[tokio::test]
    async fn test_mock_mailer_simulated_failure() {
        let mailer = MockMailer::with_options(false, true);

        let result = mailer.send(EmailMessage::new("a@x.com", "Hi", "body")).await;

        assert!(result.is_err());
        assert_eq!(mailer.sent_count(), 0);
    }
}
