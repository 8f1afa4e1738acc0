//! # strillone-events
//!
//! Event envelope and payload definitions for DNSimple webhook deliveries.
//!
//! ## Design Principles
//!
//! - Events are immutable once decoded
//! - The payload is a closed sum type; the event `name` selects the variant
//! - Unknown names or payload shapes degrade to [`EventData::Unrecognized`]
//!   instead of failing, so new provider events still produce a message
//! - Only a malformed envelope is a [`DecodeError`]
//!
//! ## Event Envelope
//!
//! Every delivery carries:
//! - The event name (`<resource>.<action>`, e.g. `domain.create`)
//! - A request identifier, unique per delivery attempt
//! - The actor who triggered the event and the account it happened in
//! - The event-specific `data` object
//!
//! ## Event Types
//!
//! Payload variants are organized by resource:
//! - Account events (`account.*`)
//! - Certificate events (`certificate.*`)
//! - Contact events (`contact.*`)
//! - DNSSEC events (`dnssec.*`)
//! - Domain events (`domain.*`)
//! - Email forward events (`email_forward.*`)
//! - Webhook events (`webhook.*`)
//! - WHOIS privacy events (`whois_privacy.*`)
//! - Zone and zone record events (`zone.*`, `zone_record.*`)

mod data;
mod de;
mod envelope;
mod error;

pub use data::*;
pub use envelope::*;
pub use error::DecodeError;
