//! Identity registry — the server-side aggregate driving attribute
//! verification.
//!
//! The registry is the sole id authority: ids are assigned monotonically
//! per registry and never reused, even after an attribute is removed.
//! Issued codes leave the registry only through the event stream, which the
//! host drains and hands to the delivery layer.

use crate::code::VerificationCode;
use crate::responses::{
    ConfirmCodeResponse, RegisterEmailResponse, RegisterPhoneResponse, SendCodeResponse,
    VisibleAttributesResponse,
};
use crate::validate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use veridian_types::{
    AttributeId, IdentityError, IdentityParams, PhoneNumber, TimestampMillis, UserId, Verifiable,
    VerificationStatus,
};

/// The contact value carried by a registered attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeValue {
    Email(String),
    Phone(PhoneNumber),
}

impl AttributeValue {
    /// Canonical key used for duplicate detection within one identity.
    pub fn normalized_key(&self) -> String {
        match self {
            Self::Email(address) => validate::normalize_email(address),
            Self::Phone(phone) => phone.normalized(),
        }
    }

    /// Whether a verification code can be issued for this kind.
    pub fn supports_verification(&self) -> bool {
        matches!(self, Self::Email(_) | Self::Phone(_))
    }
}

/// Where an issued code should be delivered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeTarget {
    Email(String),
    Phone(PhoneNumber),
}

impl From<&AttributeValue> for CodeTarget {
    fn from(value: &AttributeValue) -> Self {
        match value {
            AttributeValue::Email(address) => Self::Email(address.clone()),
            AttributeValue::Phone(phone) => Self::Phone(phone.clone()),
        }
    }
}

/// Events accumulated by the registry for the host to process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationEvent {
    /// A new attribute entered `Pending`.
    AttributeRegistered { user: UserId, id: AttributeId },
    /// A code was issued and must be delivered to its target.
    CodeIssued {
        user: UserId,
        id: AttributeId,
        target: CodeTarget,
        code: String,
    },
    /// Ownership of the attribute was confirmed.
    AttributeVerified { user: UserId, id: AttributeId },
    /// An outstanding code outlived its validity window.
    CodeExpired { user: UserId, id: AttributeId },
}

/// One attribute plus its outstanding code, if any.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct AttributeRecord {
    attribute: Verifiable<AttributeValue>,
    code: Option<VerificationCode>,
}

/// All attribute records of a single identity, most recently added first.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct IdentityRecord {
    attributes: Vec<AttributeRecord>,
}

impl IdentityRecord {
    fn find(&self, id: AttributeId) -> Option<&AttributeRecord> {
        self.attributes.iter().find(|r| r.attribute.id == id)
    }

    fn find_mut(&mut self, id: AttributeId) -> Option<&mut AttributeRecord> {
        self.attributes.iter_mut().find(|r| r.attribute.id == id)
    }
}

/// The registry of identities and their verifiable attributes.
pub struct IdentityRegistry {
    identities: HashMap<UserId, IdentityRecord>,
    params: IdentityParams,
    /// Last assigned attribute id; strictly increasing.
    next_attribute_id: u64,
    /// Pending events for the host to process.
    pending_events: Vec<VerificationEvent>,
}

impl IdentityRegistry {
    pub fn new(params: IdentityParams) -> Self {
        Self {
            identities: HashMap::new(),
            params,
            next_attribute_id: 0,
            pending_events: Vec::new(),
        }
    }

    fn next_id(&mut self) -> AttributeId {
        self.next_attribute_id += 1;
        AttributeId::new(self.next_attribute_id)
    }

    /// Register an email address for `user`.
    ///
    /// The stored value is the normalized (trimmed, lowercased) form.
    pub fn register_email(
        &mut self,
        user: &UserId,
        address: &str,
        now: TimestampMillis,
    ) -> RegisterEmailResponse {
        if !validate::is_valid_email(address) {
            return RegisterEmailResponse::Invalid;
        }
        let normalized = validate::normalize_email(address);
        if self.has_normalized_value(user, &normalized) {
            return RegisterEmailResponse::AlreadyRegistered;
        }

        let id = self.insert_attribute(user, AttributeValue::Email(normalized), now);
        RegisterEmailResponse::Success { id }
    }

    /// Register a phone number for `user`.
    pub fn register_phone(
        &mut self,
        user: &UserId,
        phone: PhoneNumber,
        now: TimestampMillis,
    ) -> RegisterPhoneResponse {
        if !validate::is_valid_phone(&phone) {
            return RegisterPhoneResponse::Invalid;
        }
        if self.has_normalized_value(user, &phone.normalized()) {
            return RegisterPhoneResponse::AlreadyRegistered;
        }

        let id = self.insert_attribute(user, AttributeValue::Phone(phone), now);
        RegisterPhoneResponse::Success { id }
    }

    /// Issue a verification code for a `Pending` attribute, or reissue one
    /// for an `Expired` attribute (the explicit resend path).
    pub fn send_code(
        &mut self,
        user: &UserId,
        id: AttributeId,
        now: TimestampMillis,
    ) -> SendCodeResponse {
        let code_length = self.params.code_length;

        let Some(identity) = self.identities.get_mut(user) else {
            return SendCodeResponse::IdentityNotFound;
        };
        let Some(record) = identity.find_mut(id) else {
            return SendCodeResponse::AttributeNotFound;
        };
        if !record.attribute.value.supports_verification() {
            return SendCodeResponse::Unsupported;
        }

        match record.attribute.status {
            VerificationStatus::Verified => SendCodeResponse::AlreadyVerified,
            VerificationStatus::Sent => SendCodeResponse::AlreadySent,
            VerificationStatus::Pending | VerificationStatus::Expired => {
                let code = VerificationCode::issue(code_length, now);
                self.pending_events.push(VerificationEvent::CodeIssued {
                    user: user.clone(),
                    id,
                    target: CodeTarget::from(&record.attribute.value),
                    code: code.code().to_string(),
                });
                record.attribute.status = VerificationStatus::Sent;
                record.code = Some(code);
                SendCodeResponse::Success
            }
        }
    }

    /// Confirm a previously issued code.
    pub fn confirm_code(
        &mut self,
        user: &UserId,
        id: AttributeId,
        submitted: &str,
        now: TimestampMillis,
    ) -> ConfirmCodeResponse {
        let validity_ms = self.params.code_validity_ms;

        let Some(identity) = self.identities.get_mut(user) else {
            return ConfirmCodeResponse::NotFound;
        };
        let Some(record) = identity.find_mut(id) else {
            return ConfirmCodeResponse::NotFound;
        };

        match record.attribute.status {
            VerificationStatus::Verified => ConfirmCodeResponse::AlreadyConfirmed,
            VerificationStatus::Pending | VerificationStatus::Expired => {
                ConfirmCodeResponse::NotSent
            }
            VerificationStatus::Sent => {
                let Some(code) = record.code.as_ref() else {
                    return ConfirmCodeResponse::NotSent;
                };
                if code.is_expired(validity_ms, now) {
                    record.attribute.status = VerificationStatus::Expired;
                    record.code = None;
                    self.pending_events.push(VerificationEvent::CodeExpired {
                        user: user.clone(),
                        id,
                    });
                    return ConfirmCodeResponse::CodeExpired;
                }
                if !code.matches(submitted) {
                    return ConfirmCodeResponse::CodeIncorrect;
                }
                record.attribute.status = VerificationStatus::Verified;
                record.code = None;
                self.pending_events
                    .push(VerificationEvent::AttributeVerified {
                        user: user.clone(),
                        id,
                    });
                ConfirmCodeResponse::Success
            }
        }
    }

    /// Ids of attributes currently visible to a requester: at minimum, all
    /// `Verified` attributes. `Pending`/`Sent` visibility is an external
    /// policy decision.
    pub fn visible_attributes(&self, user: &UserId) -> VisibleAttributesResponse {
        match self.identities.get(user) {
            None => VisibleAttributesResponse::NotFound,
            Some(identity) => VisibleAttributesResponse::Attributes(
                identity
                    .attributes
                    .iter()
                    .filter(|r| r.attribute.status.is_verified())
                    .map(|r| r.attribute.id)
                    .collect(),
            ),
        }
    }

    /// Remove an attribute record. Silent no-op for unknown user or id;
    /// the id is never reissued.
    pub fn remove_attribute(&mut self, user: &UserId, id: AttributeId) {
        if let Some(identity) = self.identities.get_mut(user) {
            identity.attributes.retain(|r| r.attribute.id != id);
        }
    }

    /// Look up an attribute by id.
    pub fn attribute(&self, user: &UserId, id: AttributeId) -> Option<&Verifiable<AttributeValue>> {
        self.identities
            .get(user)
            .and_then(|identity| identity.find(id))
            .map(|record| &record.attribute)
    }

    /// The currently outstanding code for an attribute, if any.
    pub fn issued_code(&self, user: &UserId, id: AttributeId) -> Option<&str> {
        self.identities
            .get(user)
            .and_then(|identity| identity.find(id))
            .and_then(|record| record.code.as_ref())
            .map(VerificationCode::code)
    }

    /// An email attribute shaped for profile integration.
    pub fn verifiable_email(&self, user: &UserId, id: AttributeId) -> Option<Verifiable<String>> {
        self.attribute(user, id).and_then(|attr| match &attr.value {
            AttributeValue::Email(address) => Some(Verifiable::new(
                attr.id,
                attr.status,
                attr.added,
                address.clone(),
            )),
            AttributeValue::Phone(_) => None,
        })
    }

    /// A phone attribute shaped for profile integration.
    pub fn verifiable_phone(
        &self,
        user: &UserId,
        id: AttributeId,
    ) -> Option<Verifiable<PhoneNumber>> {
        self.attribute(user, id).and_then(|attr| match &attr.value {
            AttributeValue::Phone(phone) => Some(Verifiable::new(
                attr.id,
                attr.status,
                attr.added,
                phone.clone(),
            )),
            AttributeValue::Email(_) => None,
        })
    }

    /// Drain pending events for the host to process.
    pub fn drain_events(&mut self) -> Vec<VerificationEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Serialize registry state for persistence.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            identities: self.identities.clone(),
            next_attribute_id: self.next_attribute_id,
        }
    }

    /// Restore a registry from a persisted snapshot.
    pub fn restore(snapshot: RegistrySnapshot, params: IdentityParams) -> Self {
        Self {
            identities: snapshot.identities,
            params,
            next_attribute_id: snapshot.next_attribute_id,
            pending_events: Vec::new(),
        }
    }

    /// Snapshot encoded with bincode.
    pub fn snapshot_bytes(&self) -> Result<Vec<u8>, IdentityError> {
        bincode::serialize(&self.snapshot())
            .map_err(|e| IdentityError::Serialization(e.to_string()))
    }

    /// Restore from bincode-encoded snapshot bytes.
    pub fn restore_bytes(bytes: &[u8], params: IdentityParams) -> Result<Self, IdentityError> {
        let snapshot: RegistrySnapshot =
            bincode::deserialize(bytes).map_err(|e| IdentityError::Serialization(e.to_string()))?;
        Ok(Self::restore(snapshot, params))
    }

    fn has_normalized_value(&self, user: &UserId, normalized: &str) -> bool {
        self.identities.get(user).is_some_and(|identity| {
            identity
                .attributes
                .iter()
                .any(|r| r.attribute.value.normalized_key() == normalized)
        })
    }

    fn insert_attribute(
        &mut self,
        user: &UserId,
        value: AttributeValue,
        now: TimestampMillis,
    ) -> AttributeId {
        let id = self.next_id();
        let attribute = Verifiable::new(id, VerificationStatus::Pending, now, value);
        self.identities
            .entry(user.clone())
            .or_default()
            .attributes
            .insert(0, AttributeRecord {
                attribute,
                code: None,
            });
        self.pending_events
            .push(VerificationEvent::AttributeRegistered {
                user: user.clone(),
                id,
            });
        id
    }
}

/// Serializable snapshot of registry state for persistence across restarts.
///
/// Parameters are supplied again on restore; pending events do not survive.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    identities: HashMap<UserId, IdentityRecord>,
    next_attribute_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserId {
        UserId::new(name)
    }

    fn registry() -> IdentityRegistry {
        IdentityRegistry::new(IdentityParams::veridian_defaults())
    }

    fn at(millis: u64) -> TimestampMillis {
        TimestampMillis::new(millis)
    }

    /// Helper: register an email and return its id.
    fn register(registry: &mut IdentityRegistry, user: &UserId, address: &str) -> AttributeId {
        match registry.register_email(user, address, at(0)) {
            RegisterEmailResponse::Success { id } => id,
            other => panic!("registration failed: {other:?}"),
        }
    }

    /// Helper: register + send, returning (id, issued code).
    fn register_and_send(
        registry: &mut IdentityRegistry,
        user: &UserId,
        address: &str,
    ) -> (AttributeId, String) {
        let id = register(registry, user, address);
        assert_eq!(registry.send_code(user, id, at(10)), SendCodeResponse::Success);
        let code = registry
            .issued_code(user, id)
            .expect("code outstanding after send")
            .to_string();
        (id, code)
    }

    // ── Registration ────────────────────────────────────────────────────

    #[test]
    fn register_email_creates_pending_attribute() {
        let mut reg = registry();
        let alice = user("alice");

        let id = register(&mut reg, &alice, "Alice@Example.com");

        let attr = reg.attribute(&alice, id).unwrap();
        assert_eq!(attr.status, VerificationStatus::Pending);
        assert_eq!(attr.added, at(0));
        assert_eq!(
            attr.value,
            AttributeValue::Email("alice@example.com".to_string())
        );
    }

    #[test]
    fn register_invalid_email_creates_nothing() {
        let mut reg = registry();
        let alice = user("alice");

        assert_eq!(
            reg.register_email(&alice, "not-an-email", at(0)),
            RegisterEmailResponse::Invalid
        );
        assert_eq!(
            reg.visible_attributes(&alice),
            VisibleAttributesResponse::NotFound
        );
        assert!(reg.drain_events().is_empty());
    }

    #[test]
    fn register_duplicate_normalized_email_rejected() {
        let mut reg = registry();
        let alice = user("alice");

        register(&mut reg, &alice, "alice@example.com");
        assert_eq!(
            reg.register_email(&alice, " ALICE@example.COM ", at(5)),
            RegisterEmailResponse::AlreadyRegistered
        );
    }

    #[test]
    fn same_email_allowed_for_different_users() {
        let mut reg = registry();

        register(&mut reg, &user("alice"), "shared@example.com");
        let response = reg.register_email(&user("bob"), "shared@example.com", at(1));
        assert!(matches!(response, RegisterEmailResponse::Success { .. }));
    }

    #[test]
    fn register_phone_validates_and_normalizes_duplicates() {
        let mut reg = registry();
        let alice = user("alice");

        let response = reg.register_phone(&alice, PhoneNumber::new(44, "7700 900123"), at(0));
        assert!(matches!(response, RegisterPhoneResponse::Success { .. }));

        // Same digits, different separators — still a duplicate.
        assert_eq!(
            reg.register_phone(&alice, PhoneNumber::new(44, "7700-900-123"), at(1)),
            RegisterPhoneResponse::AlreadyRegistered
        );
        assert_eq!(
            reg.register_phone(&alice, PhoneNumber::new(0, "7700900123"), at(2)),
            RegisterPhoneResponse::Invalid
        );
    }

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut reg = registry();
        let alice = user("alice");

        let first = register(&mut reg, &alice, "a@example.com");
        let second = register(&mut reg, &alice, "b@example.com");
        assert!(second > first);

        reg.remove_attribute(&alice, second);
        let third = register(&mut reg, &alice, "c@example.com");
        assert!(third > second);
    }

    #[test]
    fn attributes_are_most_recent_first() {
        let mut reg = registry();
        let alice = user("alice");

        let first = register(&mut reg, &alice, "a@example.com");
        let second = register(&mut reg, &alice, "b@example.com");

        // Verify both so they show up in the visibility query.
        for id in [first, second] {
            reg.send_code(&alice, id, at(1));
            let code = reg.issued_code(&alice, id).unwrap().to_string();
            reg.confirm_code(&alice, id, &code, at(2));
        }

        assert_eq!(
            reg.visible_attributes(&alice),
            VisibleAttributesResponse::Attributes(vec![second, first])
        );
    }

    // ── Send ────────────────────────────────────────────────────────────

    #[test]
    fn send_transitions_pending_to_sent() {
        let mut reg = registry();
        let alice = user("alice");
        let id = register(&mut reg, &alice, "a@example.com");

        assert_eq!(reg.send_code(&alice, id, at(10)), SendCodeResponse::Success);
        assert_eq!(
            reg.attribute(&alice, id).unwrap().status,
            VerificationStatus::Sent
        );
    }

    #[test]
    fn double_send_is_a_no_op_guard() {
        let mut reg = registry();
        let alice = user("alice");
        let (id, first_code) = register_and_send(&mut reg, &alice, "a@example.com");

        assert_eq!(
            reg.send_code(&alice, id, at(20)),
            SendCodeResponse::AlreadySent
        );
        assert_eq!(
            reg.attribute(&alice, id).unwrap().status,
            VerificationStatus::Sent
        );
        // The outstanding code is unchanged.
        assert_eq!(reg.issued_code(&alice, id), Some(first_code.as_str()));
    }

    #[test]
    fn send_for_unknown_identity_or_attribute() {
        let mut reg = registry();
        let alice = user("alice");

        assert_eq!(
            reg.send_code(&user("nobody"), AttributeId::new(1), at(0)),
            SendCodeResponse::IdentityNotFound
        );

        register(&mut reg, &alice, "a@example.com");
        assert_eq!(
            reg.send_code(&alice, AttributeId::new(99), at(0)),
            SendCodeResponse::AttributeNotFound
        );
    }

    #[test]
    fn send_to_verified_attribute_rejected() {
        let mut reg = registry();
        let alice = user("alice");
        let (id, code) = register_and_send(&mut reg, &alice, "a@example.com");
        reg.confirm_code(&alice, id, &code, at(20));

        assert_eq!(
            reg.send_code(&alice, id, at(30)),
            SendCodeResponse::AlreadyVerified
        );
    }

    // ── Confirm ─────────────────────────────────────────────────────────

    #[test]
    fn confirm_matching_code_verifies() {
        let mut reg = registry();
        let alice = user("alice");
        let (id, code) = register_and_send(&mut reg, &alice, "a@example.com");

        assert_eq!(
            reg.confirm_code(&alice, id, &code, at(20)),
            ConfirmCodeResponse::Success
        );
        assert_eq!(
            reg.attribute(&alice, id).unwrap().status,
            VerificationStatus::Verified
        );
        assert_eq!(reg.issued_code(&alice, id), None);
    }

    #[test]
    fn confirm_before_send_returns_not_sent() {
        let mut reg = registry();
        let alice = user("alice");
        let id = register(&mut reg, &alice, "a@example.com");

        assert_eq!(
            reg.confirm_code(&alice, id, "123456", at(5)),
            ConfirmCodeResponse::NotSent
        );
        assert_eq!(
            reg.attribute(&alice, id).unwrap().status,
            VerificationStatus::Pending
        );
    }

    #[test]
    fn confirm_wrong_code_no_transition() {
        let mut reg = registry();
        let alice = user("alice");
        let (id, code) = register_and_send(&mut reg, &alice, "a@example.com");

        let wrong = if code == "000000" { "000001" } else { "000000" };
        assert_eq!(
            reg.confirm_code(&alice, id, wrong, at(20)),
            ConfirmCodeResponse::CodeIncorrect
        );
        assert_eq!(
            reg.attribute(&alice, id).unwrap().status,
            VerificationStatus::Sent
        );
    }

    #[test]
    fn confirm_expired_code_transitions_to_expired() {
        let mut reg = registry();
        let alice = user("alice");
        let (id, code) = register_and_send(&mut reg, &alice, "a@example.com");

        let validity = IdentityParams::veridian_defaults().code_validity_ms;
        let too_late = at(10 + validity);
        assert_eq!(
            reg.confirm_code(&alice, id, &code, too_late),
            ConfirmCodeResponse::CodeExpired
        );
        assert_eq!(
            reg.attribute(&alice, id).unwrap().status,
            VerificationStatus::Expired
        );

        // Without a reissue, further confirms report NotSent.
        assert_eq!(
            reg.confirm_code(&alice, id, &code, too_late),
            ConfirmCodeResponse::NotSent
        );
    }

    #[test]
    fn resend_after_expiry_issues_fresh_code() {
        let mut reg = registry();
        let alice = user("alice");
        let (id, code) = register_and_send(&mut reg, &alice, "a@example.com");

        let validity = IdentityParams::veridian_defaults().code_validity_ms;
        reg.confirm_code(&alice, id, &code, at(10 + validity));
        assert_eq!(
            reg.attribute(&alice, id).unwrap().status,
            VerificationStatus::Expired
        );

        // Explicit resend path: Expired → Sent with a new code.
        let resend_at = at(20 + validity);
        assert_eq!(reg.send_code(&alice, id, resend_at), SendCodeResponse::Success);
        let fresh = reg.issued_code(&alice, id).unwrap().to_string();
        assert_eq!(
            reg.confirm_code(&alice, id, &fresh, at(30 + validity)),
            ConfirmCodeResponse::Success
        );
    }

    #[test]
    fn confirm_already_verified() {
        let mut reg = registry();
        let alice = user("alice");
        let (id, code) = register_and_send(&mut reg, &alice, "a@example.com");
        reg.confirm_code(&alice, id, &code, at(20));

        assert_eq!(
            reg.confirm_code(&alice, id, &code, at(30)),
            ConfirmCodeResponse::AlreadyConfirmed
        );
    }

    #[test]
    fn confirm_unknown_user_or_attribute() {
        let mut reg = registry();
        let alice = user("alice");
        register(&mut reg, &alice, "a@example.com");

        assert_eq!(
            reg.confirm_code(&user("nobody"), AttributeId::new(1), "123456", at(0)),
            ConfirmCodeResponse::NotFound
        );
        assert_eq!(
            reg.confirm_code(&alice, AttributeId::new(99), "123456", at(0)),
            ConfirmCodeResponse::NotFound
        );
    }

    // ── Visibility ──────────────────────────────────────────────────────

    #[test]
    fn visibility_includes_only_verified() {
        let mut reg = registry();
        let alice = user("alice");

        let pending = register(&mut reg, &alice, "pending@example.com");
        let (sent, _) = register_and_send(&mut reg, &alice, "sent@example.com");
        let (verified, code) = register_and_send(&mut reg, &alice, "done@example.com");
        reg.confirm_code(&alice, verified, &code, at(20));

        match reg.visible_attributes(&alice) {
            VisibleAttributesResponse::Attributes(ids) => {
                assert_eq!(ids, vec![verified]);
                assert!(!ids.contains(&pending));
                assert!(!ids.contains(&sent));
            }
            VisibleAttributesResponse::NotFound => panic!("identity should exist"),
        }
    }

    #[test]
    fn visibility_unknown_identity() {
        let reg = registry();
        assert_eq!(
            reg.visible_attributes(&user("nobody")),
            VisibleAttributesResponse::NotFound
        );
    }

    // ── Events ──────────────────────────────────────────────────────────

    #[test]
    fn events_track_the_full_lifecycle() {
        let mut reg = registry();
        let alice = user("alice");
        let (id, code) = register_and_send(&mut reg, &alice, "a@example.com");
        reg.confirm_code(&alice, id, &code, at(20));

        let events = reg.drain_events();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            VerificationEvent::AttributeRegistered {
                user: alice.clone(),
                id
            }
        );
        match &events[1] {
            VerificationEvent::CodeIssued {
                user: u,
                id: i,
                target,
                code: issued,
            } => {
                assert_eq!(u, &alice);
                assert_eq!(*i, id);
                assert_eq!(issued, &code);
                assert_eq!(target, &CodeTarget::Email("a@example.com".to_string()));
            }
            other => panic!("expected CodeIssued, got {other:?}"),
        }
        assert_eq!(
            events[2],
            VerificationEvent::AttributeVerified {
                user: alice.clone(),
                id
            }
        );
    }

    #[test]
    fn drain_events_clears_buffer() {
        let mut reg = registry();
        register(&mut reg, &user("alice"), "a@example.com");

        assert!(!reg.drain_events().is_empty());
        assert!(reg.drain_events().is_empty());
    }

    // ── Profile integration ─────────────────────────────────────────────

    #[test]
    fn verifiable_email_shapes_for_profile() {
        let mut reg = registry();
        let alice = user("alice");
        let id = register(&mut reg, &alice, "a@example.com");

        let attr = reg.verifiable_email(&alice, id).unwrap();
        assert_eq!(attr.id, id);
        assert_eq!(attr.status, VerificationStatus::Pending);
        assert_eq!(attr.value, "a@example.com");

        // Kind mismatch yields None.
        assert!(reg.verifiable_phone(&alice, id).is_none());
    }

    // ── Persistence ─────────────────────────────────────────────────────

    #[test]
    fn snapshot_restore_round_trip() {
        let mut reg = registry();
        let alice = user("alice");
        let (id, code) = register_and_send(&mut reg, &alice, "a@example.com");

        let bytes = reg.snapshot_bytes().unwrap();
        let mut restored =
            IdentityRegistry::restore_bytes(&bytes, IdentityParams::veridian_defaults()).unwrap();

        // State, outstanding code, and the id counter all survive.
        assert_eq!(
            restored.attribute(&alice, id).unwrap().status,
            VerificationStatus::Sent
        );
        assert_eq!(
            restored.confirm_code(&alice, id, &code, at(20)),
            ConfirmCodeResponse::Success
        );
        let next = register(&mut restored, &alice, "b@example.com");
        assert!(next > id);

        // Pending events do not survive a restore.
        let events = restored.drain_events();
        assert!(events
            .iter()
            .all(|e| !matches!(e, VerificationEvent::CodeIssued { .. })));
    }

    #[test]
    fn restore_rejects_corrupt_bytes() {
        let result =
            IdentityRegistry::restore_bytes(&[0xde, 0xad], IdentityParams::veridian_defaults());
        assert!(matches!(result, Err(IdentityError::Serialization(_))));
    }

    #[test]
    fn remove_attribute_is_silent_for_unknown_ids() {
        let mut reg = registry();
        let alice = user("alice");
        let id = register(&mut reg, &alice, "a@example.com");

        reg.remove_attribute(&alice, AttributeId::new(99));
        reg.remove_attribute(&user("nobody"), id);
        assert!(reg.attribute(&alice, id).is_some());

        reg.remove_attribute(&alice, id);
        assert!(reg.attribute(&alice, id).is_none());
    }
}
