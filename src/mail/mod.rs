//! Outbound email.
//!
//! The [`Mailer`] trait hides the SMTP transport so request handlers and
//! tests never need a live relay. [`smtp::SmtpMailer`] is the production
//! implementation over `lettre`.

pub mod smtp;
pub mod templates;

use async_trait::async_trait;

use crate::error::Result;

/// A fully rendered message ready for the transport. The From address
/// belongs to the transport, not the message.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers one message. No retries; a rejected or unreachable relay
    /// surfaces as `Error::Mail`.
    async fn send(&self, email: &OutboundEmail) -> Result<()>;
}
