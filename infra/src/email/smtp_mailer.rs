//! SMTP implementation of the Mailer trait using lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use signet_core::errors::DomainError;
use signet_core::services::email::{EmailMessage, Mailer};
use signet_shared::config::EmailConfig;

use crate::InfrastructureError;

/// Mailer backed by a pooled async SMTP transport.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a STARTTLS transport from configuration.
    ///
    /// Fails fast on an unparseable host or `From` address; connection
    /// errors only surface on the first send.
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        let from = config
            .from_address
            .parse::<Mailbox>()
            .map_err(|e| InfrastructureError::Config(format!("Invalid EMAIL_FROM: {}", e)))?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| InfrastructureError::Email(format!("Invalid SMTP relay: {}", e)))?
            .port(config.smtp_port);

        if !config.smtp_user.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_pass.clone(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), DomainError> {
        let to = message
            .to
            .parse::<Mailbox>()
            .map_err(|e| DomainError::Internal {
                message: format!("Invalid recipient address: {}", e),
            })?;

        let builder = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&message.subject);

        let email = match message.html {
            Some(html) => builder
                .multipart(MultiPart::alternative_plain_html(message.text, html)),
            None => builder
                .header(ContentType::TEXT_PLAIN)
                .body(message.text),
        }
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to build email: {}", e),
        })?;

        self.transport
            .send(email)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("SMTP send failed: {}", e),
            })?;

        tracing::debug!(to = %message.to, "email dispatched");
        Ok(())
    }
}
