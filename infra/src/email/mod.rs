//! Email delivery implementations.
//!
//! `SmtpMailer` delivers through a real SMTP relay; `MockMailer` records
//! messages and prints them, for development and tests.

pub mod mock_mailer;
pub mod smtp_mailer;

pub use mock_mailer::MockMailer;
pub use smtp_mailer::SmtpMailer;
