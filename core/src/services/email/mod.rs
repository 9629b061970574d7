//! Outbound email abstraction.
//!
//! The workflow layer composes messages and hands them to a [`Mailer`];
//! transport concerns (SMTP, pooling, TLS) live behind the trait in the
//! infrastructure crate.

use async_trait::async_trait;

use crate::errors::DomainError;

/// A composed email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub text: String,
    /// Optional HTML alternative body
    pub html: Option<String>,
}

impl EmailMessage {
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            text: text.into(),
            html: None,
        }
    }

    /// Attaches an HTML alternative body
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }
}

/// Email delivery trait.
///
/// Implementations must not block the async runtime; failures are surfaced
/// as errors and the caller decides whether delivery is load-bearing.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a single message
    async fn send(&self, message: EmailMessage) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_builder() {
        let message = EmailMessage::new("a@x.com", "Hello", "body")
            .with_html("<p>body</p>");

        assert_eq!(message.to, "a@x.com");
        assert_eq!(message.html.as_deref(), Some("<p>body</p>"));
    }
}
