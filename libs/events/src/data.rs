//! Typed payloads for every event the provider publishes.
//!
//! The event name selects the payload shape. Names outside the catalogue, and
//! payloads that do not match the shape their name requires, decode as
//! [`EventData::Unrecognized`].

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

// =============================================================================
// Event Name Constants
// =============================================================================

/// All known event names as constants.
pub mod event_types {
    // Account
    pub const ACCOUNT_UPDATE: &str = "account.update";
    pub const ACCOUNT_BILLING_SETTINGS_UPDATE: &str = "account.billing_settings_update";

    // Account membership
    pub const ACCOUNT_USER_INVITE: &str = "account.user_invite";
    pub const ACCOUNT_USER_INVITATION_ACCEPT: &str = "account.user_invitation_accept";
    pub const ACCOUNT_USER_INVITATION_REVOKE: &str = "account.user_invitation_revoke";
    pub const ACCOUNT_USER_REMOVE: &str = "account.user_remove";

    // Certificate
    pub const CERTIFICATE_ISSUE: &str = "certificate.issue";
    pub const CERTIFICATE_REMOVE_PRIVATE_KEY: &str = "certificate.remove_private_key";

    // Contact
    pub const CONTACT_CREATE: &str = "contact.create";
    pub const CONTACT_UPDATE: &str = "contact.update";
    pub const CONTACT_DELETE: &str = "contact.delete";

    // DNSSEC
    pub const DNSSEC_CREATE: &str = "dnssec.create";
    pub const DNSSEC_DELETE: &str = "dnssec.delete";
    pub const DNSSEC_ROTATION_START: &str = "dnssec.rotation_start";
    pub const DNSSEC_ROTATION_COMPLETE: &str = "dnssec.rotation_complete";

    // Domain
    pub const DOMAIN_AUTO_RENEWAL_ENABLE: &str = "domain.auto_renewal_enable";
    pub const DOMAIN_AUTO_RENEWAL_DISABLE: &str = "domain.auto_renewal_disable";
    pub const DOMAIN_CREATE: &str = "domain.create";
    pub const DOMAIN_DELETE: &str = "domain.delete";
    pub const DOMAIN_REGISTER: &str = "domain.register";
    pub const DOMAIN_REGISTER_STARTED: &str = "domain.register:started";
    pub const DOMAIN_RENEW: &str = "domain.renew";
    pub const DOMAIN_RENEW_STARTED: &str = "domain.renew:started";
    pub const DOMAIN_DELEGATION_CHANGE: &str = "domain.delegation_change";
    pub const DOMAIN_REGISTRANT_CHANGE: &str = "domain.registrant_change";
    pub const DOMAIN_REGISTRANT_CHANGE_STARTED: &str = "domain.registrant_change:started";
    pub const DOMAIN_REGISTRANT_CHANGE_CANCELLED: &str = "domain.registrant_change:cancelled";
    pub const DOMAIN_RESOLUTION_ENABLE: &str = "domain.resolution_enable";
    pub const DOMAIN_RESOLUTION_DISABLE: &str = "domain.resolution_disable";
    pub const DOMAIN_TOKEN_RESET: &str = "domain.token_reset";
    pub const DOMAIN_TRANSFER: &str = "domain.transfer";
    pub const DOMAIN_TRANSFER_STARTED: &str = "domain.transfer:started";
    pub const DOMAIN_TRANSFER_CANCELLED: &str = "domain.transfer:cancelled";

    // Domain transfer lock
    pub const DOMAIN_TRANSFER_LOCK_ENABLE: &str = "domain.transfer_lock_enable";
    pub const DOMAIN_TRANSFER_LOCK_DISABLE: &str = "domain.transfer_lock_disable";

    // Email forward
    pub const EMAIL_FORWARD_CREATE: &str = "email_forward.create";
    pub const EMAIL_FORWARD_UPDATE: &str = "email_forward.update";
    pub const EMAIL_FORWARD_DELETE: &str = "email_forward.delete";

    // Webhook
    pub const WEBHOOK_CREATE: &str = "webhook.create";
    pub const WEBHOOK_DELETE: &str = "webhook.delete";

    // WHOIS privacy
    pub const WHOIS_PRIVACY_ENABLE: &str = "whois_privacy.enable";
    pub const WHOIS_PRIVACY_DISABLE: &str = "whois_privacy.disable";
    pub const WHOIS_PRIVACY_PURCHASE: &str = "whois_privacy.purchase";
    pub const WHOIS_PRIVACY_RENEW: &str = "whois_privacy.renew";

    // Zone
    pub const ZONE_CREATE: &str = "zone.create";
    pub const ZONE_DELETE: &str = "zone.delete";

    // Zone record
    pub const ZONE_RECORD_CREATE: &str = "zone_record.create";
    pub const ZONE_RECORD_UPDATE: &str = "zone_record.update";
    pub const ZONE_RECORD_DELETE: &str = "zone_record.delete";
}

// =============================================================================
// Payload Kinds
// =============================================================================

/// The payload shape an event name carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    Account,
    AccountMembership,
    Certificate,
    Contact,
    Dnssec,
    Domain,
    DomainTransferLock,
    EmailForward,
    Webhook,
    WhoisPrivacy,
    Zone,
    ZoneRecord,
}

impl PayloadKind {
    /// Looks up the payload kind for an event name.
    ///
    /// Returns `None` for names outside the published catalogue.
    pub fn for_event(name: &str) -> Option<Self> {
        use event_types::*;

        let kind = match name {
            ACCOUNT_UPDATE | ACCOUNT_BILLING_SETTINGS_UPDATE => PayloadKind::Account,

            ACCOUNT_USER_INVITE
            | ACCOUNT_USER_INVITATION_ACCEPT
            | ACCOUNT_USER_INVITATION_REVOKE
            | ACCOUNT_USER_REMOVE => PayloadKind::AccountMembership,

            CERTIFICATE_ISSUE | CERTIFICATE_REMOVE_PRIVATE_KEY => PayloadKind::Certificate,

            CONTACT_CREATE | CONTACT_UPDATE | CONTACT_DELETE => PayloadKind::Contact,

            DNSSEC_CREATE | DNSSEC_DELETE | DNSSEC_ROTATION_START | DNSSEC_ROTATION_COMPLETE => {
                PayloadKind::Dnssec
            }

            DOMAIN_AUTO_RENEWAL_ENABLE
            | DOMAIN_AUTO_RENEWAL_DISABLE
            | DOMAIN_CREATE
            | DOMAIN_DELETE
            | DOMAIN_REGISTER
            | DOMAIN_REGISTER_STARTED
            | DOMAIN_RENEW
            | DOMAIN_RENEW_STARTED
            | DOMAIN_DELEGATION_CHANGE
            | DOMAIN_REGISTRANT_CHANGE
            | DOMAIN_REGISTRANT_CHANGE_STARTED
            | DOMAIN_REGISTRANT_CHANGE_CANCELLED
            | DOMAIN_RESOLUTION_ENABLE
            | DOMAIN_RESOLUTION_DISABLE
            | DOMAIN_TOKEN_RESET
            | DOMAIN_TRANSFER
            | DOMAIN_TRANSFER_STARTED
            | DOMAIN_TRANSFER_CANCELLED => PayloadKind::Domain,

            DOMAIN_TRANSFER_LOCK_ENABLE | DOMAIN_TRANSFER_LOCK_DISABLE => {
                PayloadKind::DomainTransferLock
            }

            EMAIL_FORWARD_CREATE | EMAIL_FORWARD_UPDATE | EMAIL_FORWARD_DELETE => {
                PayloadKind::EmailForward
            }

            WEBHOOK_CREATE | WEBHOOK_DELETE => PayloadKind::Webhook,

            WHOIS_PRIVACY_ENABLE
            | WHOIS_PRIVACY_DISABLE
            | WHOIS_PRIVACY_PURCHASE
            | WHOIS_PRIVACY_RENEW => PayloadKind::WhoisPrivacy,

            ZONE_CREATE | ZONE_DELETE => PayloadKind::Zone,

            ZONE_RECORD_CREATE | ZONE_RECORD_UPDATE | ZONE_RECORD_DELETE => {
                PayloadKind::ZoneRecord
            }

            _ => return None,
        };

        Some(kind)
    }
}

// =============================================================================
// Event Data
// =============================================================================

/// Event-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum EventData {
    Account(AccountEventData),
    AccountMembership(AccountMembershipEventData),
    Certificate(CertificateEventData),
    Contact(ContactEventData),
    Dnssec(DnssecEventData),
    Domain(DomainEventData),
    DomainTransferLock(DomainTransferLockEventData),
    EmailForward(EmailForwardEventData),
    Webhook(WebhookEventData),
    WhoisPrivacy(WhoisPrivacyEventData),
    Zone(ZoneEventData),
    ZoneRecord(ZoneRecordEventData),
    /// Unknown event name, or a payload that did not match its name.
    Unrecognized { name: String },
}

impl EventData {
    /// Decodes the `data` object for the event `name`.
    ///
    /// Never fails: a name outside the catalogue or a payload of the wrong
    /// shape yields [`EventData::Unrecognized`].
    pub fn from_json(name: &str, data: serde_json::Value) -> Self {
        let Some(kind) = PayloadKind::for_event(name) else {
            return Self::unrecognized(name);
        };

        let decoded = match kind {
            PayloadKind::Account => serde_json::from_value(data).map(EventData::Account),
            PayloadKind::AccountMembership => {
                serde_json::from_value(data).map(EventData::AccountMembership)
            }
            PayloadKind::Certificate => serde_json::from_value(data).map(EventData::Certificate),
            PayloadKind::Contact => serde_json::from_value(data).map(EventData::Contact),
            PayloadKind::Dnssec => serde_json::from_value(data).map(EventData::Dnssec),
            PayloadKind::Domain => serde_json::from_value(data).map(EventData::Domain),
            PayloadKind::DomainTransferLock => {
                serde_json::from_value(data).map(EventData::DomainTransferLock)
            }
            PayloadKind::EmailForward => serde_json::from_value(data).map(EventData::EmailForward),
            PayloadKind::Webhook => serde_json::from_value(data).map(EventData::Webhook),
            PayloadKind::WhoisPrivacy => serde_json::from_value(data).map(EventData::WhoisPrivacy),
            PayloadKind::Zone => serde_json::from_value(data).map(EventData::Zone),
            PayloadKind::ZoneRecord => serde_json::from_value(data).map(EventData::ZoneRecord),
        };

        decoded.unwrap_or_else(|_| Self::unrecognized(name))
    }

    fn unrecognized(name: &str) -> Self {
        EventData::Unrecognized {
            name: name.to_string(),
        }
    }

    /// The payload kind, or `None` for unrecognized payloads.
    pub fn kind(&self) -> Option<PayloadKind> {
        let kind = match self {
            EventData::Account(_) => PayloadKind::Account,
            EventData::AccountMembership(_) => PayloadKind::AccountMembership,
            EventData::Certificate(_) => PayloadKind::Certificate,
            EventData::Contact(_) => PayloadKind::Contact,
            EventData::Dnssec(_) => PayloadKind::Dnssec,
            EventData::Domain(_) => PayloadKind::Domain,
            EventData::DomainTransferLock(_) => PayloadKind::DomainTransferLock,
            EventData::EmailForward(_) => PayloadKind::EmailForward,
            EventData::Webhook(_) => PayloadKind::Webhook,
            EventData::WhoisPrivacy(_) => PayloadKind::WhoisPrivacy,
            EventData::Zone(_) => PayloadKind::Zone,
            EventData::ZoneRecord(_) => PayloadKind::ZoneRecord,
            EventData::Unrecognized { .. } => return None,
        };
        Some(kind)
    }
}

// =============================================================================
// Payloads
// =============================================================================

/// Payload for `account.*` settings events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountEventData {
    pub account: MemberAccount,
}

/// Payload for account membership events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountMembershipEventData {
    pub account: MemberAccount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_invitation: Option<AccountInvitation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Payload for `certificate.*` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateEventData {
    pub certificate: Certificate,
}

/// Payload for `contact.*` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEventData {
    pub contact: Contact,
}

/// Payload for `dnssec.*` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnssecEventData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegation_signer_record: Option<DelegationSignerRecord>,
}

/// Payload for `domain.*` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEventData {
    pub domain: Domain,

    /// New registrant, for registrant changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrant: Option<Contact>,

    /// New name servers, for delegation changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegation: Option<Vec<String>>,
}

/// Payload for `domain.transfer_lock_*` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainTransferLockEventData {
    pub domain: Domain,
}

/// Payload for `email_forward.*` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailForwardEventData {
    pub email_forward: EmailForward,
}

/// Payload for `webhook.*` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEventData {
    pub webhook: Webhook,
}

/// Payload for `whois_privacy.*` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhoisPrivacyEventData {
    pub domain: Domain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whois_privacy: Option<WhoisPrivacy>,
}

/// Payload for `zone.*` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneEventData {
    pub zone: Zone,
}

/// Payload for `zone_record.*` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecordEventData {
    pub zone_record: ZoneRecord,
}

// =============================================================================
// Resources
// =============================================================================

/// The account a membership event refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberAccount {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInvitation {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificate {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub domain_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub common_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegationSignerRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub domain_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub algorithm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub digest: String,
    #[serde(deserialize_with = "null_as_default")]
    pub digest_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub keytag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub account_id: u64,
    pub registrant_id: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unicode_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailForward {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub domain_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub alias_email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub destination_email: String,

    /// Older name for `alias_email`, still sent alongside it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Older name for `destination_email`, still sent alongside it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl EmailForward {
    /// The forwarding address, falling back to `from`.
    pub fn alias(&self) -> &str {
        fallback(&self.alias_email, self.from.as_deref())
    }

    /// The delivery address, falling back to `to`.
    pub fn destination(&self) -> &str {
        fallback(&self.destination_email, self.to.as_deref())
    }
}

fn fallback<'a>(current: &'a str, legacy: Option<&'a str>) -> &'a str {
    match legacy {
        Some(legacy) if current.is_empty() => legacy,
        _ => current,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhoisPrivacy {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub domain_id: u64,
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Zone {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub account_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub zone_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub record_type: String,
}
