//! Response taxonomy for registration, send, and confirm operations.
//!
//! Each enum is exhaustive and closed: callers must handle every variant.

use serde::{Deserialize, Serialize};
use veridian_types::AttributeId;

/// Outcome of registering an email address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegisterEmailResponse {
    /// Attribute created in `Pending` with the assigned id.
    Success { id: AttributeId },
    /// The same normalized address already exists for this identity.
    AlreadyRegistered,
    /// The submitted address failed format validation.
    Invalid,
}

/// Outcome of registering a phone number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegisterPhoneResponse {
    /// Attribute created in `Pending` with the assigned id.
    Success { id: AttributeId },
    /// The same normalized number already exists for this identity.
    AlreadyRegistered,
    /// The submitted number failed format validation.
    Invalid,
}

/// Outcome of issuing a verification code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SendCodeResponse {
    Success,
    /// A code is already outstanding; deliberate no-op guard against
    /// duplicate sends.
    AlreadySent,
    IdentityNotFound,
    AttributeNotFound,
    AlreadyVerified,
    /// The attribute kind does not support code verification.
    Unsupported,
}

/// Outcome of confirming a verification code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmCodeResponse {
    Success,
    /// Submitted code does not match; no transition.
    CodeIncorrect,
    /// The code outlived its validity window; the attribute is now
    /// `Expired`.
    CodeExpired,
    AlreadyConfirmed,
    /// No code was ever issued for the attribute's current cycle.
    NotSent,
    NotFound,
}

/// Attribute ids visible to a requester, or `NotFound` for an unknown
/// identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleAttributesResponse {
    NotFound,
    Attributes(Vec<AttributeId>),
}
