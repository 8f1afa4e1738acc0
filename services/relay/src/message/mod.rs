//! Event → one-line chat message.
//!
//! Every message starts with a prefix naming the account (linked) and the
//! actor. The payload variant picks an entity to link, and the exact event
//! name picks the verb phrase. Names a variant does not know fall back to
//! that variant's default. Webhook, WHOIS privacy, zone and zone record
//! events have no default and render an empty message.

mod link;
mod url;

use strillone_events::{
    event_types::*, AccountMembershipEventData, CertificateEventData, ContactEventData,
    DomainEventData, DomainTransferLockEventData, EmailForwardEventData, Event, EventData,
    WebhookEventData, WhoisPrivacyEventData, ZoneEventData, ZoneRecordEventData,
};

pub use link::{LinkFormatter, SlackLinks};
pub use url::{build_url, UrlBuilder};

// =============================================================================
// Verb Tables
// =============================================================================

/// Verb phrases for `"{prefix} {verb} {link}"` messages, keyed by event name.
type VerbTable = &'static [(&'static str, &'static str)];

const CERTIFICATE_VERBS: VerbTable = &[(
    CERTIFICATE_REMOVE_PRIVATE_KEY,
    "deleted the private key for the certificate",
)];

const CONTACT_VERBS: VerbTable = &[
    (CONTACT_CREATE, "created the contact"),
    (CONTACT_UPDATE, "updated the contact"),
    (CONTACT_DELETE, "deleted the contact"),
];

const DOMAIN_VERBS: VerbTable = &[
    (DOMAIN_AUTO_RENEWAL_ENABLE, "enabled auto-renewal for the domain"),
    (DOMAIN_AUTO_RENEWAL_DISABLE, "disabled auto-renewal for the domain"),
    (DOMAIN_CREATE, "created the domain"),
    (DOMAIN_DELETE, "deleted the domain"),
    (DOMAIN_REGISTER, "registered the domain"),
    (DOMAIN_RENEW, "renewed the domain"),
    (DOMAIN_RESOLUTION_ENABLE, "enabled resolution for the domain"),
    (DOMAIN_RESOLUTION_DISABLE, "disabled resolution for the domain"),
    (DOMAIN_TOKEN_RESET, "reset the token for the domain"),
    (DOMAIN_TRANSFER, "transferred the domain"),
];

const DOMAIN_TRANSFER_LOCK_VERBS: VerbTable = &[
    (DOMAIN_TRANSFER_LOCK_ENABLE, "enabled transfer lock for the domain"),
    (DOMAIN_TRANSFER_LOCK_DISABLE, "disabled transfer lock for the domain"),
];

const EMAIL_FORWARD_VERBS: VerbTable = &[
    (EMAIL_FORWARD_CREATE, "created the email forward"),
    (EMAIL_FORWARD_UPDATE, "updated the email forward"),
    (EMAIL_FORWARD_DELETE, "deleted the email forward"),
];

const WEBHOOK_VERBS: VerbTable = &[
    (WEBHOOK_CREATE, "created the webhook"),
    (WEBHOOK_DELETE, "deleted the webhook"),
];

const WHOIS_PRIVACY_VERBS: VerbTable = &[
    (WHOIS_PRIVACY_DISABLE, "disabled whois privacy for the domain"),
    (WHOIS_PRIVACY_ENABLE, "enabled whois privacy for the domain"),
    (WHOIS_PRIVACY_PURCHASE, "purchased whois privacy for the domain"),
    (WHOIS_PRIVACY_RENEW, "renewed whois privacy for the domain"),
];

const ZONE_VERBS: VerbTable = &[(ZONE_DELETE, "deleted the zone")];

const ZONE_RECORD_VERBS: VerbTable = &[
    (ZONE_RECORD_CREATE, "created the record"),
    (ZONE_RECORD_UPDATE, "updated the record"),
    (ZONE_RECORD_DELETE, "deleted the record"),
];

fn verb(table: VerbTable, name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(event, _)| *event == name)
        .map(|(_, verb)| *verb)
}

// =============================================================================
// Formatter
// =============================================================================

/// Formats events into chat messages. Pure: holds only the URL base.
#[derive(Debug, Clone)]
pub struct MessageFormatter {
    urls: UrlBuilder,
}

/// Per-event values shared by every template.
struct Scope<'a> {
    name: &'a str,
    account_id: u64,
    actor: &'a str,
    prefix: String,
    links: &'a dyn LinkFormatter,
}

impl Scope<'_> {
    fn sentence(&self, verb: &str, link: &str) -> String {
        format!("{} {} {}", self.prefix, verb, link)
    }

    fn from_table(&self, table: VerbTable, link: &str) -> Option<String> {
        verb(table, self.name).map(|verb| self.sentence(verb, link))
    }

    fn performed(&self) -> String {
        format!("{} performed {}", self.prefix, self.name)
    }
}

impl MessageFormatter {
    pub fn new(urls: UrlBuilder) -> Self {
        Self { urls }
    }

    pub fn urls(&self) -> &UrlBuilder {
        &self.urls
    }

    /// Renders the one-line message for `event`.
    ///
    /// Never fails; unmatched names resolve to the variant default.
    pub fn format(&self, event: &Event, links: &dyn LinkFormatter) -> String {
        let account = &event.account;
        let account_url = self.urls.build("/a/{}/account", &[&account.id]);
        let prefix = format!(
            "[{}] {}",
            links.format_link(&account.display, &account_url),
            event.actor.pretty
        );

        let scope = Scope {
            name: &event.name,
            account_id: account.id,
            actor: &event.actor.pretty,
            prefix,
            links,
        };

        match &event.data {
            EventData::AccountMembership(data) => self
                .account_membership(&scope, data)
                .unwrap_or_else(|| scope.performed()),
            EventData::Certificate(data) => self
                .certificate(&scope, data)
                .unwrap_or_else(|| scope.performed()),
            EventData::Contact(data) => self
                .contact(&scope, data)
                .unwrap_or_else(|| scope.performed()),
            EventData::Domain(data) => self.domain(&scope, data),
            EventData::DomainTransferLock(data) => self
                .domain_transfer_lock(&scope, data)
                .unwrap_or_else(|| scope.performed()),
            EventData::EmailForward(data) => self
                .email_forward(&scope, data)
                .unwrap_or_else(|| scope.performed()),
            EventData::Webhook(data) => self.webhook(&scope, data).unwrap_or_default(),
            EventData::WhoisPrivacy(data) => self.whois_privacy(&scope, data).unwrap_or_default(),
            EventData::Zone(data) => self.zone(&scope, data).unwrap_or_default(),
            EventData::ZoneRecord(data) => self.zone_record(&scope, data).unwrap_or_default(),
            EventData::Account(_) | EventData::Dnssec(_) | EventData::Unrecognized { .. } => {
                scope.performed()
            }
        }
    }

    fn domain_link(&self, scope: &Scope<'_>, domain_name: &str) -> String {
        let url = self
            .urls
            .build("/a/{}/domains/{}", &[&scope.account_id, &domain_name]);
        scope.links.format_link(domain_name, &url)
    }

    // Membership messages lead with the actor; the account is the link.
    fn account_membership(
        &self,
        scope: &Scope<'_>,
        data: &AccountMembershipEventData,
    ) -> Option<String> {
        let member_account = data.account.id;
        let members_url = self
            .urls
            .build("/a/{}/account/members", &[&member_account]);
        let members = scope
            .links
            .format_link(&member_account.to_string(), &members_url);
        let actor = scope.actor;

        let text = match scope.name {
            ACCOUNT_USER_INVITE => {
                let invitee = data
                    .account_invitation
                    .as_ref()
                    .map(|invitation| invitation.email.as_str())
                    .unwrap_or_default();
                format!("{actor} invited {invitee} to account {members}")
            }
            ACCOUNT_USER_INVITATION_ACCEPT => {
                format!("{actor} accepted invitation to account {members}")
            }
            ACCOUNT_USER_INVITATION_REVOKE => {
                format!("{actor} rejected invitation to account {members}")
            }
            ACCOUNT_USER_REMOVE => {
                let removed = data
                    .user
                    .as_ref()
                    .map(|user| user.email.as_str())
                    .unwrap_or_default();
                format!("{actor} removed {removed} from account {members}")
            }
            _ => return None,
        };

        Some(text)
    }

    fn certificate(&self, scope: &Scope<'_>, data: &CertificateEventData) -> Option<String> {
        let certificate = &data.certificate;
        let url = self.urls.build(
            "/a/{}/domains/{}/certificates/{}",
            &[&scope.account_id, &certificate.domain_id, &certificate.id],
        );
        let link = scope.links.format_link(&certificate.common_name, &url);
        scope.from_table(CERTIFICATE_VERBS, &link)
    }

    fn contact(&self, scope: &Scope<'_>, data: &ContactEventData) -> Option<String> {
        let contact = &data.contact;
        let display = format!("{} {}", contact.first_name, contact.last_name);
        let url = self
            .urls
            .build("/a/{}/contacts/{}", &[&scope.account_id, &contact.id]);
        let link = scope.links.format_link(&display, &url);
        scope.from_table(CONTACT_VERBS, &link)
    }

    fn domain(&self, scope: &Scope<'_>, data: &DomainEventData) -> String {
        let link = self.domain_link(scope, &data.domain.name);

        match scope.name {
            DOMAIN_DELEGATION_CHANGE => {
                let servers = data.delegation.as_deref().unwrap_or_default().join(", ");
                format!(
                    "{} changed the delegation for the domain {} to {}",
                    scope.prefix, link, servers
                )
            }
            DOMAIN_REGISTRANT_CHANGE => {
                let registrant = data
                    .registrant
                    .as_ref()
                    .map(|contact| contact.label.as_str())
                    .unwrap_or_default();
                format!(
                    "{} changed the registrant for the domain {} to {}",
                    scope.prefix, link, registrant
                )
            }
            _ => scope.from_table(DOMAIN_VERBS, &link).unwrap_or_else(|| {
                format!("{} performed {} on domain {}", scope.prefix, scope.name, link)
            }),
        }
    }

    fn domain_transfer_lock(
        &self,
        scope: &Scope<'_>,
        data: &DomainTransferLockEventData,
    ) -> Option<String> {
        let link = self.domain_link(scope, &data.domain.name);
        scope.from_table(DOMAIN_TRANSFER_LOCK_VERBS, &link)
    }

    fn email_forward(&self, scope: &Scope<'_>, data: &EmailForwardEventData) -> Option<String> {
        let forward = &data.email_forward;
        let display = format!("{} → {}", forward.alias(), forward.destination());
        // There is no page per forward; link the domain's forward list.
        let url = self.urls.build(
            "/a/{}/domains/{}/email_forwards",
            &[&scope.account_id, &forward.domain_id],
        );
        let link = scope.links.format_link(&display, &url);
        scope.from_table(EMAIL_FORWARD_VERBS, &link)
    }

    fn webhook(&self, scope: &Scope<'_>, data: &WebhookEventData) -> Option<String> {
        let webhook = &data.webhook;
        let url = self
            .urls
            .build("/a/{}/webhooks/{}", &[&scope.account_id, &webhook.id]);
        let link = scope.links.format_link(&webhook.url, &url);
        scope.from_table(WEBHOOK_VERBS, &link)
    }

    fn whois_privacy(&self, scope: &Scope<'_>, data: &WhoisPrivacyEventData) -> Option<String> {
        let link = self.domain_link(scope, &data.domain.name);
        scope.from_table(WHOIS_PRIVACY_VERBS, &link)
    }

    fn zone(&self, scope: &Scope<'_>, data: &ZoneEventData) -> Option<String> {
        let link = self.domain_link(scope, &data.zone.name);
        scope.from_table(ZONE_VERBS, &link)
    }

    fn zone_record(&self, scope: &Scope<'_>, data: &ZoneRecordEventData) -> Option<String> {
        let record = &data.zone_record;
        let display = format!(
            "{} {}.{} {}",
            record.record_type, record.name, record.zone_id, record.content
        );
        let url = self.urls.build(
            "/a/{}/domains/{}/records/{}",
            &[&scope.account_id, &record.zone_id, &record.id],
        );
        let link = scope.links.format_link(&display, &url);
        scope.from_table(ZONE_RECORD_VERBS, &link)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;
    use strillone_events::{decode, Account, Actor};

    use super::*;

    /// Swaps the link order so assertions read `<text|url>`.
    struct TextFirstLinks;

    impl LinkFormatter for TextFirstLinks {
        fn format_link(&self, text: &str, url: &str) -> String {
            format!("<{text}|{url}>")
        }
    }

    fn formatter() -> MessageFormatter {
        MessageFormatter::new(UrlBuilder::new("https://dnsimple.com"))
    }

    fn event(name: &str, data: serde_json::Value) -> Event {
        let payload = json!({
            "name": name,
            "api_version": "v2",
            "request_identifier": "0f31483c-c303-497b-8a88-2edb48aa111e",
            "actor": {"id": "1010", "entity": "account", "pretty": "john@example.com"},
            "account": {"id": 1010, "display": "Acme", "identifier": "acme"},
            "data": data,
        });
        decode(payload.to_string().as_bytes()).unwrap()
    }

    const PREFIX: &str = "[<https://dnsimple.com/a/1010/account|Acme>] john@example.com";
    const DOMAIN_LINK: &str = "<https://dnsimple.com/a/1010/domains/example.com|example.com>";

    #[test]
    fn test_domain_create_with_slack_links() {
        let event = decode(br#"{"data": {"domain": {"id": 1, "name": "example.com", "state": "hosted", "account_id": 1010}}, "actor": {"id": "1", "entity": "user", "pretty": "example@example.com"}, "account": {"id": 1010, "display": "User", "identifier": "user"}, "name": "domain.create", "api_version": "v2", "request_identifier": "096bfc29-2bf0-40c6-991b-f03b1f8521f1"}"#).unwrap();

        assert_eq!(
            formatter().format(&event, &SlackLinks),
            "[<https://dnsimple.com/a/1010/account|User>] example@example.com created the domain <https://dnsimple.com/a/1010/domains/example.com|example.com>"
        );
    }

    #[test]
    fn test_default_message_without_account() {
        let event = Event::builder("event.name")
            .account(Account {
                identifier: "ID".to_string(),
                display: "john.doe@gmail.com".to_string(),
                ..Default::default()
            })
            .actor(Actor {
                pretty: "john.doe@email.com".to_string(),
                ..Default::default()
            })
            .build();

        assert_eq!(
            formatter().format(&event, &TextFirstLinks),
            "[<john.doe@gmail.com|https://dnsimple.com/a/0/account>] john.doe@email.com performed event.name"
        );
    }

    #[test]
    fn test_default_message_with_empty_account() {
        let event = Event::builder("event.name")
            .actor(Actor {
                pretty: "someone@example.com".to_string(),
                ..Default::default()
            })
            .build();

        assert_eq!(
            formatter().format(&event, &SlackLinks),
            "[<https://dnsimple.com/a/0/account|>] someone@example.com performed event.name"
        );
    }

    #[rstest]
    #[case("domain.auto_renewal_enable", "enabled auto-renewal for the domain")]
    #[case("domain.auto_renewal_disable", "disabled auto-renewal for the domain")]
    #[case("domain.create", "created the domain")]
    #[case("domain.delete", "deleted the domain")]
    #[case("domain.register", "registered the domain")]
    #[case("domain.renew", "renewed the domain")]
    #[case("domain.resolution_enable", "enabled resolution for the domain")]
    #[case("domain.resolution_disable", "disabled resolution for the domain")]
    #[case("domain.token_reset", "reset the token for the domain")]
    #[case("domain.transfer", "transferred the domain")]
    #[case("domain.transfer_lock_enable", "enabled transfer lock for the domain")]
    #[case("domain.transfer_lock_disable", "disabled transfer lock for the domain")]
    #[case("whois_privacy.enable", "enabled whois privacy for the domain")]
    #[case("whois_privacy.disable", "disabled whois privacy for the domain")]
    #[case("whois_privacy.purchase", "purchased whois privacy for the domain")]
    #[case("whois_privacy.renew", "renewed whois privacy for the domain")]
    fn test_domain_verbs(#[case] name: &str, #[case] verb: &str) {
        let event = event(name, json!({"domain": {"id": 1, "name": "example.com"}}));

        assert_eq!(
            formatter().format(&event, &SlackLinks),
            format!("{PREFIX} {verb} {DOMAIN_LINK}")
        );
    }

    #[test]
    fn test_domain_delegation_change() {
        let event = event(
            "domain.delegation_change",
            json!({
                "domain": {"id": 1, "name": "example.com"},
                "delegation": ["ns1.dnsimple.com", "ns2.dnsimple.com"]
            }),
        );

        assert_eq!(
            formatter().format(&event, &SlackLinks),
            format!("{PREFIX} changed the delegation for the domain {DOMAIN_LINK} to ns1.dnsimple.com, ns2.dnsimple.com")
        );
    }

    #[test]
    fn test_domain_delegation_change_without_servers() {
        let event = event(
            "domain.delegation_change",
            json!({"domain": {"id": 1, "name": "example.com"}, "delegation": null}),
        );

        assert_eq!(
            formatter().format(&event, &SlackLinks),
            format!("{PREFIX} changed the delegation for the domain {DOMAIN_LINK} to ")
        );
    }

    #[test]
    fn test_domain_registrant_change() {
        let event = event(
            "domain.registrant_change",
            json!({
                "domain": {"id": 1, "name": "example.com"},
                "registrant": {"id": 7, "label": "office", "first_name": "Jane", "last_name": "Doe"}
            }),
        );

        assert_eq!(
            formatter().format(&event, &SlackLinks),
            format!("{PREFIX} changed the registrant for the domain {DOMAIN_LINK} to office")
        );
    }

    #[test]
    fn test_domain_default_mentions_domain() {
        let event = event(
            "domain.transfer:started",
            json!({"domain": {"id": 1, "name": "example.com"}}),
        );

        assert_eq!(
            formatter().format(&event, &SlackLinks),
            format!("{PREFIX} performed domain.transfer:started on domain {DOMAIN_LINK}")
        );
    }

    #[test]
    fn test_transfer_lock_with_text_first_links() {
        let event = decode(br#"{"data": {"domain": {"id": 1, "name": "example.com", "state": "registered", "account_id": 1010, "auto_renew": false, "created_at": "2023-03-02T02:39:18Z", "expires_at": "2024-03-02T02:39:22Z", "expires_on": "2024-03-02", "updated_at": "2023-08-31T06:46:48Z", "unicode_name": "example.com", "private_whois": false, "registrant_id": 101}}, "name": "domain.transfer_lock_disable", "actor": {"id": "1010", "entity": "account", "pretty": "xxxxxxx-xxxxxxx-xxxxxxx@xxxxx.com"}, "account": {"id": 1010, "display": "xxxxxxx-xxxxxxx-xxxxxxx", "identifier": "xxxxxxx-xxxxxxx-xxxxxxx@xxxxx.com"}, "api_version": "v2", "request_identifier": "0f31483c-c303-497b-8a88-2edb48aa111e"}"#).unwrap();

        assert_eq!(
            formatter().format(&event, &TextFirstLinks),
            "[<xxxxxxx-xxxxxxx-xxxxxxx|https://dnsimple.com/a/1010/account>] xxxxxxx-xxxxxxx-xxxxxxx@xxxxx.com disabled transfer lock for the domain <example.com|https://dnsimple.com/a/1010/domains/example.com>"
        );
    }

    #[rstest]
    #[case(
        "account.user_invite",
        json!({"account": {"id": 12345, "email": "john.doe@email.com"}, "account_invitation": {"email": "jane.doe@email.com", "account_id": 12345}}),
        "john@example.com invited jane.doe@email.com to account <12345|https://dnsimple.com/a/12345/account/members>"
    )]
    #[case(
        "account.user_invitation_accept",
        json!({"account": {"id": 12345, "email": "john.doe@email.com"}, "account_invitation": {"email": "jane.doe@email.com", "account_id": 12345, "invitation_accepted_at": "2020-05-12T18:43:44Z"}}),
        "john@example.com accepted invitation to account <12345|https://dnsimple.com/a/12345/account/members>"
    )]
    #[case(
        "account.user_invitation_revoke",
        json!({"account": {"id": 12345, "email": "john.doe@email.com"}, "account_invitation": {"email": "jane.doe@email.com", "account_id": 12345, "invitation_accepted_at": null}}),
        "john@example.com rejected invitation to account <12345|https://dnsimple.com/a/12345/account/members>"
    )]
    #[case(
        "account.user_remove",
        json!({"user": {"id": 1120, "email": "jane.doe@email.com"}, "account": {"id": 12345, "email": "john.doe@email.com"}}),
        "john@example.com removed jane.doe@email.com from account <12345|https://dnsimple.com/a/12345/account/members>"
    )]
    fn test_account_membership(
        #[case] name: &str,
        #[case] data: serde_json::Value,
        #[case] expected: &str,
    ) {
        let event = event(name, data);
        assert_eq!(formatter().format(&event, &TextFirstLinks), expected);
    }

    #[test]
    fn test_certificate_remove_private_key() {
        let event = event(
            "certificate.remove_private_key",
            json!({"certificate": {"id": 42, "domain_id": 9, "common_name": "www.example.com"}}),
        );

        assert_eq!(
            formatter().format(&event, &SlackLinks),
            format!("{PREFIX} deleted the private key for the certificate <https://dnsimple.com/a/1010/domains/9/certificates/42|www.example.com>")
        );
    }

    #[test]
    fn test_certificate_default() {
        let event = event(
            "certificate.issue",
            json!({"certificate": {"id": 42, "domain_id": 9, "common_name": "www.example.com"}}),
        );

        assert_eq!(
            formatter().format(&event, &SlackLinks),
            format!("{PREFIX} performed certificate.issue")
        );
    }

    #[rstest]
    #[case("contact.create", "created the contact")]
    #[case("contact.update", "updated the contact")]
    #[case("contact.delete", "deleted the contact")]
    fn test_contact(#[case] name: &str, #[case] verb: &str) {
        let event = event(
            name,
            json!({"contact": {"id": 3, "first_name": "Jane", "last_name": "Doe"}}),
        );

        assert_eq!(
            formatter().format(&event, &SlackLinks),
            format!("{PREFIX} {verb} <https://dnsimple.com/a/1010/contacts/3|Jane Doe>")
        );
    }

    #[test]
    fn test_contact_with_null_fields_keeps_specific_message() {
        let event = event(
            "contact.update",
            json!({"contact": {"id": 3, "label": null, "first_name": "Jane", "last_name": "Doe", "email": null}}),
        );

        assert_eq!(
            formatter().format(&event, &SlackLinks),
            format!("{PREFIX} updated the contact <https://dnsimple.com/a/1010/contacts/3|Jane Doe>")
        );
    }

    #[rstest]
    #[case("email_forward.create", "created the email forward")]
    #[case("email_forward.update", "updated the email forward")]
    #[case("email_forward.delete", "deleted the email forward")]
    fn test_email_forward(#[case] name: &str, #[case] verb: &str) {
        let event = event(
            name,
            json!({"email_forward": {
                "id": 5,
                "domain_id": 9,
                "alias_email": "hello@example.com",
                "destination_email": "jane@example.org",
                "from": "hello@example.com",
                "to": "jane@example.org"
            }}),
        );

        assert_eq!(
            formatter().format(&event, &SlackLinks),
            format!("{PREFIX} {verb} <https://dnsimple.com/a/1010/domains/9/email_forwards|hello@example.com → jane@example.org>")
        );
    }

    #[rstest]
    #[case("webhook.create", "created the webhook")]
    #[case("webhook.delete", "deleted the webhook")]
    fn test_webhook(#[case] name: &str, #[case] verb: &str) {
        let event = event(
            name,
            json!({"webhook": {"id": 17, "url": "https://hooks.example.com/in"}}),
        );

        assert_eq!(
            formatter().format(&event, &SlackLinks),
            format!("{PREFIX} {verb} <https://dnsimple.com/a/1010/webhooks/17|https://hooks.example.com/in>")
        );
    }

    #[test]
    fn test_zone_delete() {
        let event = event("zone.delete", json!({"zone": {"id": 1, "name": "example.com"}}));

        assert_eq!(
            formatter().format(&event, &SlackLinks),
            format!("{PREFIX} deleted the zone {DOMAIN_LINK}")
        );
    }

    #[rstest]
    #[case("zone_record.create", "created the record")]
    #[case("zone_record.update", "updated the record")]
    #[case("zone_record.delete", "deleted the record")]
    fn test_zone_record(#[case] name: &str, #[case] verb: &str) {
        let event = event(
            name,
            json!({"zone_record": {"id": 64, "zone_id": "example.com", "name": "www", "type": "A", "content": "192.0.2.1"}}),
        );

        assert_eq!(
            formatter().format(&event, &SlackLinks),
            format!("{PREFIX} {verb} <https://dnsimple.com/a/1010/domains/example.com/records/64|A www.example.com 192.0.2.1>")
        );
    }

    #[test]
    fn test_zone_create_renders_empty() {
        let event = event("zone.create", json!({"zone": {"id": 1, "name": "example.com"}}));

        assert_eq!(formatter().format(&event, &SlackLinks), "");
    }

    #[test]
    fn test_unknown_name_in_known_namespace_is_generic() {
        let event = event(
            "whois_privacy.future",
            json!({"domain": {"name": "example.com"}}),
        );

        assert_eq!(
            formatter().format(&event, &SlackLinks),
            format!("{PREFIX} performed whois_privacy.future")
        );
    }

    #[test]
    fn test_unmatched_name_in_no_default_variant_is_empty() {
        let data = EventData::Webhook(WebhookEventData {
            webhook: strillone_events::Webhook {
                id: 1,
                url: "https://x".to_string(),
            },
        });
        let event = Event::builder("webhook.update").data(data).build();

        assert_eq!(formatter().format(&event, &SlackLinks), "");
    }

    #[rstest]
    #[case("account.update", json!({"account": {"id": 1010}}))]
    #[case("dnssec.rotation_start", json!({"delegation_signer_record": {"id": 1, "domain_id": 9}}))]
    #[case("domain.create", json!({"unexpected": true}))]
    fn test_generic_default(#[case] name: &str, #[case] data: serde_json::Value) {
        let event = event(name, data);

        assert_eq!(
            formatter().format(&event, &SlackLinks),
            format!("{PREFIX} performed {name}")
        );
    }

    #[test]
    fn test_format_is_deterministic() {
        let event = event(
            "domain.renew",
            json!({"domain": {"id": 1, "name": "example.com"}}),
        );
        let formatter = formatter();

        let first = formatter.format(&event, &SlackLinks);
        let second = formatter.format(&event, &SlackLinks);
        assert_eq!(first, second);
    }
}
