//! # Slack Sink
//!
//! Posts plain-text messages to one statically configured channel via
//! `chat.postMessage`.

use crate::core::{Config, DeliveryError};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Channel every message is delivered to
    fn channel(&self) -> &str;

    /// Post one plain-text message to the configured channel.
    async fn post_message(&self, text: &str) -> Result<(), DeliveryError>;
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

pub struct SlackClient {
    client: reqwest::Client,
    bot_token: String,
    channel_id: String,
    base_url: String,
}

impl SlackClient {
    pub fn new(
        bot_token: impl Into<String>,
        channel_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            bot_token: bot_token.into(),
            channel_id: channel_id.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.slack_bot_token,
            &config.slack_channel_id,
            &config.slack_api_url,
        )
    }
}

#[async_trait]
impl NotificationSink for SlackClient {
    fn channel(&self) -> &str {
        &self.channel_id
    }

    async fn post_message(&self, text: &str) -> Result<(), DeliveryError> {
        let url = format!("{}/api/chat.postMessage", self.base_url);
        let body = json!({
            "channel": self.channel_id,
            "text": text,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.bot_token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        // Slack reports most failures as HTTP 200 with `ok: false`
        let parsed: PostMessageResponse = response.json().await?;
        if parsed.ok {
            Ok(())
        } else {
            Err(DeliveryError::Api(
                parsed.error.unwrap_or_else(|| "unknown_error".to_string()),
            ))
        }
    }
}
