//! Event envelope - the common wrapper for all webhook deliveries.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;
use crate::{DecodeError, EventData};

/// Who triggered the event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Actor {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Actor kind, e.g. "user" or "account".
    #[serde(deserialize_with = "null_as_default")]
    pub entity: String,

    /// Human readable label, usually an email address.
    #[serde(deserialize_with = "null_as_default")]
    pub pretty: String,
}

/// The account the event happened in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub display: String,
    #[serde(deserialize_with = "null_as_default")]
    pub identifier: String,
}

/// A decoded webhook event.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// The event name (e.g., "domain.create").
    pub name: String,

    /// Provider API version the payload was produced with.
    pub api_version: String,

    /// Unique per delivery attempt; the deduplication key.
    pub request_identifier: String,

    pub actor: Actor,

    pub account: Account,

    /// Event-specific payload.
    pub data: EventData,
}

/// Wire shape of the envelope before the payload is typed.
#[derive(Debug, Deserialize)]
struct RawEvent {
    name: String,
    #[serde(default)]
    api_version: Option<String>,
    #[serde(default)]
    request_identifier: Option<String>,
    #[serde(default)]
    actor: Option<Actor>,
    #[serde(default)]
    account: Option<Account>,
    #[serde(default)]
    data: serde_json::Value,
}

/// Decodes a raw webhook body into an [`Event`].
///
/// Fails only when the bytes are not a JSON object with a string `name`.
/// Unknown event names and unexpected payload shapes decode successfully
/// with [`EventData::Unrecognized`].
pub fn decode(payload: &[u8]) -> Result<Event, DecodeError> {
    let raw: RawEvent = serde_json::from_slice(payload)?;
    let data = EventData::from_json(&raw.name, raw.data);

    Ok(Event {
        name: raw.name,
        api_version: raw.api_version.unwrap_or_default(),
        request_identifier: raw.request_identifier.unwrap_or_default(),
        actor: raw.actor.unwrap_or_default(),
        account: raw.account.unwrap_or_default(),
        data,
    })
}

impl Event {
    /// Creates a new event builder.
    pub fn builder(name: impl Into<String>) -> EventBuilder {
        EventBuilder::new(name)
    }
}

/// Builder for constructing events in code rather than from a payload.
#[derive(Debug)]
pub struct EventBuilder {
    name: String,
    api_version: String,
    request_identifier: String,
    actor: Actor,
    account: Account,
    data: Option<EventData>,
}

impl EventBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            api_version: "v2".to_string(),
            request_identifier: String::new(),
            actor: Actor::default(),
            account: Account::default(),
            data: None,
        }
    }

    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn request_identifier(mut self, id: impl Into<String>) -> Self {
        self.request_identifier = id.into();
        self
    }

    pub fn actor(mut self, actor: Actor) -> Self {
        self.actor = actor;
        self
    }

    pub fn account(mut self, account: Account) -> Self {
        self.account = account;
        self
    }

    pub fn data(mut self, data: EventData) -> Self {
        self.data = Some(data);
        self
    }

    /// Builds the event. Without explicit data the payload is unrecognized.
    pub fn build(self) -> Event {
        let data = self.data.unwrap_or_else(|| EventData::Unrecognized {
            name: self.name.clone(),
        });

        Event {
            name: self.name,
            api_version: self.api_version,
            request_identifier: self.request_identifier,
            actor: self.actor,
            account: self.account,
            data,
        }
    }
}
