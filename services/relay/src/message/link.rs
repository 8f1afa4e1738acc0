//! Destination markup for links.

/// Renders a (display text, URL) pair in a chat destination's markup.
pub trait LinkFormatter: Send + Sync {
    fn format_link(&self, text: &str, url: &str) -> String;
}

/// Slack `mrkdwn` links: `<url|text>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlackLinks;

impl LinkFormatter for SlackLinks {
    fn format_link(&self, text: &str, url: &str) -> String {
        format!("<{url}|{text}>")
    }
}
