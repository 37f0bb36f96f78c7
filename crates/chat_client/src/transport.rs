use async_trait::async_trait;
use shared::protocol::{ChatResponse, ChatSubmission};
use url::Url;

/// Narrow seam between the widget and the network so the conversation flow
/// is testable without a server.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn submit(&self, submission: ChatSubmission) -> anyhow::Result<ChatResponse>;
}

pub struct HttpChatTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpChatTransport {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn submit(&self, submission: ChatSubmission) -> anyhow::Result<ChatResponse> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&submission)
            .send()
            .await?;
        Ok(response.json::<ChatResponse>().await?)
    }
}
