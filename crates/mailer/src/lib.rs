//! Outbound mail capability. The relay logic depends only on the
//! [`MailSender`] trait; [`SmtpMailSender`] is the production transport.

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("invalid mailbox address '{0}'")]
    InvalidMailbox(String),
    #[error("mail transport failure: {0}")]
    Transport(String),
}

/// One message ready for the transport. Bodies are HTML; callers are
/// responsible for escaping anything user-supplied before it lands here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: String,
}

#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<(), DeliveryError>;
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
    pub from_name: String,
    pub send_timeout: Duration,
}

pub struct SmtpMailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailSender {
    pub fn new(config: &SmtpConfig) -> Result<Self, DeliveryError> {
        let from = named_mailbox(&config.from_name, &config.from_address)?;
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| DeliveryError::Transport(e.to_string()))?
            .port(config.port)
            .timeout(Some(config.send_timeout));
        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }
        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl MailSender for SmtpMailSender {
    async fn send(&self, email: OutboundEmail) -> Result<(), DeliveryError> {
        let to = parse_mailbox(&email.to)?;
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&email.subject)
            .header(ContentType::TEXT_HTML);
        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(parse_mailbox(reply_to)?);
        }
        let message = builder
            .body(email.html_body)
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;
        info!(to = %email.to, subject = %email.subject, "mail dispatched");
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address
        .parse()
        .map_err(|_| DeliveryError::InvalidMailbox(address.to_string()))
}

fn named_mailbox(name: &str, address: &str) -> Result<Mailbox, DeliveryError> {
    let parsed = address
        .parse()
        .map_err(|_| DeliveryError::InvalidMailbox(address.to_string()))?;
    let display = if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    };
    Ok(Mailbox::new(display, parsed))
}
