//! Outbound delivery contract.
//!
//! The dispatcher only knows a [`Messenger`]: something that renders links in
//! its own markup and can post one notification to a [`Destination`].

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::message::LinkFormatter;

/// Leading character of a destination token that disables outbound calls.
pub const DRY_RUN_MARKER: char = '-';

/// Where a message is delivered. The token is a credential.
///
/// `Debug` and `Display` only show the first segment.
#[derive(Clone, PartialEq, Eq)]
pub struct Destination {
    token: String,
}

impl Destination {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Join path segments into one token, e.g. `T000/B000/XXXX`.
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        let token = segments
            .iter()
            .map(|segment| segment.as_ref())
            .collect::<Vec<&str>>()
            .join("/");
        Self { token }
    }

    /// The full token. Do not log it.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Dry runs format and log but never call out.
    pub fn is_dry_run(&self) -> bool {
        self.token.starts_with(DRY_RUN_MARKER)
    }

    pub fn redacted(&self) -> String {
        match self.token.split_once('/') {
            Some((first, _)) => format!("{first}/***"),
            None => "***".to_string(),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Destination").field(&self.redacted()).finish()
    }
}

/// A rendered message plus the metadata the destination shows with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The event name.
    pub title: String,
    pub text: String,
    /// Severity color, always "good" for relayed events.
    pub color: &'static str,
}

impl Notification {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            color: "good",
        }
    }
}

/// Errors from an outbound delivery attempt.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The request never got a response (connect, TLS, timeout).
    #[error("delivery request failed: {0}")]
    Transport(String),

    /// The destination answered with a non-success status.
    #[error("destination rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The client could not be set up.
    #[error("delivery client misconfigured: {0}")]
    Configuration(String),
}

/// A chat backend the relay can post to.
#[async_trait]
pub trait Messenger: LinkFormatter {
    /// Post one notification. Called at most once per relayed event.
    async fn post(
        &self,
        destination: &Destination,
        notification: &Notification,
    ) -> Result<(), DeliveryError>;
}
