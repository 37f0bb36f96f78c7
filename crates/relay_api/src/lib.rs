//! Stateless chat-relay logic: validate a submission, escape it, compose the
//! operator notification and the visitor acknowledgment, and push both
//! through the configured [`MailSender`]. Holds no state across calls.

use std::sync::Arc;

use mailer::MailSender;
use shared::{
    domain::{server_timestamp, ContactDetails, RelayedMessage, PHONE_NOT_PROVIDED},
    error::RelayError,
    protocol::ChatSubmission,
};
use tracing::{error, info, warn};

pub mod compose;
pub mod sanitize;

use sanitize::{escape_html, is_valid_email};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully";

#[derive(Clone)]
pub struct RelayContext {
    pub mailer: Arc<dyn MailSender>,
    pub operator_email: String,
    pub site_name: String,
}

/// Relays one chat submission. Validation failures come back as
/// [`RelayError::MissingField`] / [`RelayError::InvalidEmail`]; a failed
/// operator notification as [`RelayError::Delivery`] with no retry. The
/// acknowledgment send is best-effort and never surfaced.
pub async fn relay_chat_message(
    ctx: &RelayContext,
    submission: ChatSubmission,
) -> Result<String, RelayError> {
    let name = require_field(submission.name.as_deref(), "name")?;
    let email = require_field(submission.email.as_deref(), "email")?;
    let message = require_field(submission.message.as_deref(), "message")?;

    if !is_valid_email(&email) {
        return Err(RelayError::InvalidEmail);
    }

    let relayed = RelayedMessage {
        contact: ContactDetails {
            name: escape_html(&name),
            email,
            phone: submission
                .phone
                .as_deref()
                .map(str::trim)
                .filter(|phone| !phone.is_empty())
                .map(escape_html)
                .unwrap_or_else(|| PHONE_NOT_PROVIDED.to_string()),
        },
        message: escape_html(&message),
        timestamp: submission
            .timestamp
            .as_deref()
            .map(str::trim)
            .filter(|stamp| !stamp.is_empty())
            .map(escape_html)
            .unwrap_or_else(server_timestamp),
    };

    let notification = compose::notification_email(&relayed, &ctx.operator_email, &ctx.site_name);
    ctx.mailer.send(notification).await.map_err(|e| {
        error!(error = %e, "operator notification send failed");
        RelayError::Delivery(e.to_string())
    })?;
    info!(visitor = %relayed.contact.email, "chat message relayed to operator");

    let acknowledgment = compose::acknowledgment_email(&relayed, &ctx.site_name);
    if let Err(e) = ctx.mailer.send(acknowledgment).await {
        warn!(error = %e, "acknowledgment send failed; not surfaced to caller");
    }

    Ok(SUCCESS_MESSAGE.to_string())
}

fn require_field(value: Option<&str>, field: &'static str) -> Result<String, RelayError> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(RelayError::MissingField { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mailer::{DeliveryError, OutboundEmail};
    use tokio::sync::Mutex;

    /// Records sends and fails the first `fail_first` of them.
    struct RecordingSender {
        sent: Mutex<Vec<OutboundEmail>>,
        fail_first: usize,
    }

    impl RecordingSender {
        fn succeeding() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_first: 0,
            }
        }

        fn failing(fail_first: usize) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_first,
            }
        }
    }

    #[async_trait]
    impl MailSender for RecordingSender {
        async fn send(&self, email: OutboundEmail) -> Result<(), DeliveryError> {
            let mut sent = self.sent.lock().await;
            let attempt = sent.len();
            sent.push(email);
            if attempt < self.fail_first {
                return Err(DeliveryError::Transport("smtp unavailable".into()));
            }
            Ok(())
        }
    }

    fn ctx(sender: Arc<RecordingSender>) -> RelayContext {
        RelayContext {
            mailer: sender,
            operator_email: "info@example.com".into(),
            site_name: "Pure Prints Media".into(),
        }
    }

    fn submission() -> ChatSubmission {
        ChatSubmission {
            name: Some("Jo".into()),
            email: Some("jo@example.com".into()),
            message: Some("Hi".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn happy_path_sends_notification_then_acknowledgment() {
        let sender = Arc::new(RecordingSender::succeeding());
        let message = relay_chat_message(&ctx(sender.clone()), submission())
            .await
            .expect("relay");
        assert_eq!(message, SUCCESS_MESSAGE);

        let sent = sender.sent.lock().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "info@example.com");
        assert_eq!(sent[0].reply_to.as_deref(), Some("jo@example.com"));
        assert_eq!(sent[1].to, "jo@example.com");
    }

    #[tokio::test]
    async fn missing_email_names_the_field() {
        let sender = Arc::new(RecordingSender::succeeding());
        let mut sub = submission();
        sub.email = None;
        let err = relay_chat_message(&ctx(sender.clone()), sub)
            .await
            .expect_err("should fail");
        assert!(matches!(err, RelayError::MissingField { field: "email" }));
        assert!(sender.sent.lock().await.is_empty());
    }

    #[tokio::test]
    async fn whitespace_only_name_counts_as_missing() {
        let sender = Arc::new(RecordingSender::succeeding());
        let mut sub = submission();
        sub.name = Some("   ".into());
        let err = relay_chat_message(&ctx(sender), sub)
            .await
            .expect_err("should fail");
        assert!(matches!(err, RelayError::MissingField { field: "name" }));
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_before_any_send() {
        let sender = Arc::new(RecordingSender::succeeding());
        let mut sub = submission();
        sub.email = Some("not-an-email".into());
        let err = relay_chat_message(&ctx(sender.clone()), sub)
            .await
            .expect_err("should fail");
        assert!(matches!(err, RelayError::InvalidEmail));
        assert!(sender.sent.lock().await.is_empty());
    }

    #[tokio::test]
    async fn notification_failure_surfaces_and_skips_acknowledgment() {
        let sender = Arc::new(RecordingSender::failing(1));
        let err = relay_chat_message(&ctx(sender.clone()), submission())
            .await
            .expect_err("should fail");
        assert!(matches!(err, RelayError::Delivery(_)));
        // Only the failed notification attempt; no acknowledgment try.
        assert_eq!(sender.sent.lock().await.len(), 1);
    }

    /// Succeeds on the first send, fails every later one.
    struct FailAfterFirst {
        sent: Mutex<Vec<OutboundEmail>>,
    }

    #[async_trait]
    impl MailSender for FailAfterFirst {
        async fn send(&self, email: OutboundEmail) -> Result<(), DeliveryError> {
            let mut sent = self.sent.lock().await;
            let attempt = sent.len();
            sent.push(email);
            if attempt >= 1 {
                return Err(DeliveryError::Transport("mailbox full".into()));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn acknowledgment_failure_is_swallowed() {
        let sender = Arc::new(FailAfterFirst {
            sent: Mutex::new(Vec::new()),
        });
        let message = relay_chat_message(
            &RelayContext {
                mailer: sender.clone(),
                operator_email: "info@example.com".into(),
                site_name: "Pure Prints Media".into(),
            },
            submission(),
        )
        .await
        .expect("primary send succeeded");
        assert_eq!(message, SUCCESS_MESSAGE);
        assert_eq!(sender.sent.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn markup_in_message_is_escaped_not_stripped() {
        let sender = Arc::new(RecordingSender::succeeding());
        let mut sub = submission();
        sub.message = Some("<script>alert('hi')</script>".into());
        relay_chat_message(&ctx(sender.clone()), sub)
            .await
            .expect("relay");
        let sent = sender.sent.lock().await;
        assert!(sent[0].html_body.contains("&lt;script&gt;"));
        assert!(!sent[0].html_body.contains("<script>alert"));
    }

    #[tokio::test]
    async fn phone_and_timestamp_receive_defaults() {
        let sender = Arc::new(RecordingSender::succeeding());
        relay_chat_message(&ctx(sender.clone()), submission())
            .await
            .expect("relay");
        let sent = sender.sent.lock().await;
        assert!(sent[0].html_body.contains("Not provided"));
        assert!(sent[0].html_body.contains("Time:"));
    }
}
