//! Contact-attribute verification.
//!
//! Per-attribute state machine: `Pending → Sent → Verified`, with
//! `Sent → Expired` when a code outlives its validity window, and the
//! explicit resend path `Expired → Sent`. Every operation returns a closed
//! response enum that callers match exhaustively — there is no generic
//! error escape hatch.

pub mod code;
pub mod registry;
pub mod responses;
pub mod validate;

pub use code::VerificationCode;
pub use registry::{
    AttributeValue, CodeTarget, IdentityRegistry, RegistrySnapshot, VerificationEvent,
};
pub use responses::{
    ConfirmCodeResponse, RegisterEmailResponse, RegisterPhoneResponse, SendCodeResponse,
    VisibleAttributesResponse,
};
