//! Notification dispatch: decode → dedup check → format → deliver → record.
//!
//! The request identifier is recorded only after a successful delivery (or a
//! dry run), so a failed delivery stays eligible for the sender's retry.

use std::sync::Arc;

use strillone_events::{decode, DecodeError};
use thiserror::Error;
use tracing::{error, info, instrument, warn};

use crate::cache::DeliveryCache;
use crate::delivery::{DeliveryError, Destination, Messenger, Notification};
use crate::message::MessageFormatter;

/// Terminal success states of one delivery request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Posted to the destination.
    Delivered(String),
    /// Formatted and logged; the destination is a dry run.
    DryRun(String),
    /// The request identifier was already relayed within the TTL.
    Duplicate,
}

impl DispatchOutcome {
    /// The formatted message, if one was produced.
    pub fn text(&self) -> Option<&str> {
        match self {
            DispatchOutcome::Delivered(text) | DispatchOutcome::DryRun(text) => Some(text),
            DispatchOutcome::Duplicate => None,
        }
    }
}

/// Terminal failure states of one delivery request.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The payload is not an event. The sender's fault.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The destination did not accept the message. Safe to retry.
    #[error("{source}")]
    Delivery {
        request_identifier: String,
        text: String,
        #[source]
        source: DeliveryError,
    },
}

/// Orchestrates one webhook delivery end to end.
pub struct Dispatcher {
    formatter: MessageFormatter,
    cache: Arc<DeliveryCache>,
    messenger: Arc<dyn Messenger>,
}

impl Dispatcher {
    pub fn new(
        formatter: MessageFormatter,
        cache: Arc<DeliveryCache>,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        Self {
            formatter,
            cache,
            messenger,
        }
    }

    pub fn cache(&self) -> &Arc<DeliveryCache> {
        &self.cache
    }

    /// Relay one raw webhook payload to `destination`.
    #[instrument(skip_all, fields(destination = %destination))]
    pub async fn dispatch(
        &self,
        destination: &Destination,
        payload: &[u8],
    ) -> Result<DispatchOutcome, DispatchError> {
        let event = decode(payload).inspect_err(|e| {
            warn!(error = %e, "Failed to decode event");
        })?;

        let request_identifier = event.request_identifier.as_str();
        // Without an identifier there is nothing to deduplicate on.
        let tracked = !request_identifier.is_empty();
        if !tracked {
            warn!(event = %event.name, "Event has no request identifier");
        }

        if tracked && self.cache.has(request_identifier).await {
            info!(
                request_identifier = %request_identifier,
                event = %event.name,
                "Skipping event as already processed"
            );
            return Ok(DispatchOutcome::Duplicate);
        }

        let text = self.formatter.format(&event, self.messenger.as_ref());
        info!(
            request_identifier = %request_identifier,
            event = %event.name,
            text = %text,
            "Formatted event"
        );

        if destination.is_dry_run() {
            if tracked {
                self.cache.insert(request_identifier).await;
            }
            return Ok(DispatchOutcome::DryRun(text));
        }

        let notification = Notification::new(event.name.as_str(), text.as_str());
        match self.messenger.post(destination, &notification).await {
            Ok(()) => {
                if tracked {
                    self.cache.insert(request_identifier).await;
                }
                info!(
                    request_identifier = %request_identifier,
                    event = %event.name,
                    "Delivered event"
                );
                Ok(DispatchOutcome::Delivered(text))
            }
            Err(e) => {
                error!(
                    request_identifier = %request_identifier,
                    event = %event.name,
                    text = %text,
                    error = %e,
                    "Failed to deliver event"
                );
                Err(DispatchError::Delivery {
                    request_identifier: request_identifier.to_string(),
                    text,
                    source: e,
                })
            }
        }
    }
}
