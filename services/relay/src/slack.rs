//! Slack incoming-webhook client.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use crate::delivery::{DeliveryError, Destination, Messenger, Notification};
use crate::message::{LinkFormatter, SlackLinks};

pub const AUTHOR_NAME: &str = "DNSimple";
pub const AUTHOR_SUBNAME: &str = "Strillone";
pub const AUTHOR_LINK: &str = "https://github.com/dnsimple/strillone";
pub const AUTHOR_ICON: &str = "https://cdn.dnsimple.com/assets/strillone/icon128.png";

/// Longest response body kept in a rejection error.
const MAX_ERROR_BODY: usize = 512;

/// Incoming-webhook message body.
#[derive(Debug, Serialize)]
struct WebhookMessage<'a> {
    attachments: [Attachment<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Attachment<'a> {
    color: &'a str,
    fallback: &'a str,
    author_name: &'a str,
    author_subname: &'a str,
    author_link: &'a str,
    author_icon: &'a str,
    title: &'a str,
    text: &'a str,
    ts: i64,
}

impl<'a> WebhookMessage<'a> {
    fn new(notification: &'a Notification) -> Self {
        Self {
            attachments: [Attachment {
                color: notification.color,
                fallback: &notification.text,
                author_name: AUTHOR_NAME,
                author_subname: AUTHOR_SUBNAME,
                author_link: AUTHOR_LINK,
                author_icon: AUTHOR_ICON,
                title: &notification.title,
                text: &notification.text,
                ts: Utc::now().timestamp(),
            }],
        }
    }
}

/// Posts notifications to `{base_url}/services/{token}`.
#[derive(Debug, Clone)]
pub struct SlackClient {
    client: reqwest::Client,
    base_url: String,
}

impl SlackClient {
    /// Creates a client with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError::Configuration` if the HTTP client cannot be
    /// built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("strillone/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DeliveryError::Configuration(format!("failed to build HTTP client: {e}")))?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn webhook_url(&self, destination: &Destination) -> String {
        format!("{}/services/{}", self.base_url, destination.token())
    }
}

impl LinkFormatter for SlackClient {
    fn format_link(&self, text: &str, url: &str) -> String {
        SlackLinks.format_link(text, url)
    }
}

#[async_trait]
impl Messenger for SlackClient {
    async fn post(
        &self,
        destination: &Destination,
        notification: &Notification,
    ) -> Result<(), DeliveryError> {
        debug!(destination = %destination, "Sending event to Slack");

        let response = self
            .client
            .post(self.webhook_url(destination))
            .json(&WebhookMessage::new(notification))
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let mut body = response.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY {
            let mut end = MAX_ERROR_BODY;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            body.truncate(end);
        }

        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
