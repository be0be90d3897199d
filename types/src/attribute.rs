//! Verifiable attribute wrapper and its lifecycle status.

use crate::time::TimestampMillis;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a verifiable attribute.
///
/// Assigned monotonically by the identity registry (the sole id authority),
/// unique within an identity, never reused after removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AttributeId(u64);

impl AttributeId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Verification lifecycle of a contact attribute.
///
/// Transitions move forward (`Pending → Sent → Verified`), with `Expired`
/// reachable from `Sent` when a code outlives its validity window. The one
/// backward edge is the explicit resend path `Expired → Sent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// Registered, no code issued yet.
    Pending,
    /// A verification code has been issued and awaits confirmation.
    Sent,
    /// Ownership of the attribute has been confirmed.
    Verified,
    /// The issued code outlived its validity window.
    Expired,
}

impl VerificationStatus {
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }
}

/// A value paired with its verification lifecycle metadata.
///
/// Attribute identity is the id alone: two `Verifiable`s compare equal iff
/// their ids match, regardless of value or status.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Verifiable<T> {
    pub id: AttributeId,
    pub status: VerificationStatus,
    /// When the attribute was added to the identity.
    pub added: TimestampMillis,
    pub value: T,
}

impl<T> Verifiable<T> {
    pub fn new(
        id: AttributeId,
        status: VerificationStatus,
        added: TimestampMillis,
        value: T,
    ) -> Self {
        Self {
            id,
            status,
            added,
            value,
        }
    }
}

impl<T: Clone> Verifiable<T> {
    /// Copy of this attribute with a different status.
    pub fn with_status(&self, status: VerificationStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

impl<T> PartialEq for Verifiable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Verifiable<T> {}
