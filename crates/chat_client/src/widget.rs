use std::sync::Arc;

use shared::{domain::server_timestamp, protocol::ChatSubmission};
use thiserror::Error;
use tracing::warn;

use crate::transport::ChatTransport;

pub const BOT_THANKS: &str = "Thanks for your message! We'll get back to you soon.";
pub const BOT_APOLOGY: &str =
    "Sorry, there was an error sending your message. Please try again.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("visitor details must be submitted before messages")]
    DetailsRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Visitor,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub speaker: Speaker,
    pub text: String,
}

/// Append-only chat log shown in the widget.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<ChatEntry>,
}

impl Transcript {
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.entries.push(ChatEntry {
            speaker,
            text: text.into(),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorDetails {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

enum WidgetState {
    Welcome,
    Conversation { details: VisitorDetails },
}

/// The contact widget's conversation flow: collect visitor details once,
/// then relay each message and append the bot reply (or the apology when
/// the submission fails).
pub struct ChatWidget {
    transport: Arc<dyn ChatTransport>,
    state: WidgetState,
    transcript: Transcript,
}

impl ChatWidget {
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            transport,
            state: WidgetState::Welcome,
            transcript: Transcript::default(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Header greeting once details are in, e.g. `Hi Jo!`.
    pub fn greeting(&self) -> Option<String> {
        match &self.state {
            WidgetState::Welcome => None,
            WidgetState::Conversation { details } => Some(format!("Hi {}!", details.name)),
        }
    }

    /// Moves from the welcome form into the conversation.
    pub fn submit_details(&mut self, details: VisitorDetails) {
        self.state = WidgetState::Conversation { details };
    }

    /// Sends one visitor message. Blank input is dropped. On a successful
    /// relay the canned thank-you is appended; any transport or parsing
    /// failure appends the apology and nothing is retried.
    pub async fn send_message(&mut self, text: &str) -> Result<(), WidgetError> {
        let message = text.trim();
        if message.is_empty() {
            return Ok(());
        }
        let details = match &self.state {
            WidgetState::Conversation { details } => details.clone(),
            WidgetState::Welcome => return Err(WidgetError::DetailsRequired),
        };

        self.transcript.push(Speaker::Visitor, message);

        let submission = ChatSubmission {
            name: Some(details.name),
            email: Some(details.email),
            phone: details.phone,
            message: Some(message.to_string()),
            timestamp: Some(server_timestamp()),
        };

        match self.transport.submit(submission).await {
            Ok(response) if response.success => {
                self.transcript.push(Speaker::Bot, BOT_THANKS);
            }
            Ok(response) => {
                // The relay answered with a structured failure; the original
                // widget leaves the log untouched in this case.
                warn!(error = ?response.error, "chat relay reported failure");
            }
            Err(error) => {
                warn!(%error, "chat submission failed");
                self.transcript.push(Speaker::Bot, BOT_APOLOGY);
            }
        }
        Ok(())
    }
}
