//! Fundamental types for the Veridian identity service.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: timestamps, verifiable-attribute wrappers, phone numbers,
//! delegation chains, service parameters, and the shared error enum.

pub mod attribute;
pub mod delegation;
pub mod error;
pub mod params;
pub mod phone;
pub mod time;
pub mod user;

pub use attribute::{AttributeId, Verifiable, VerificationStatus};
pub use delegation::{Delegation, DelegationChain, SessionIdentity};
pub use error::IdentityError;
pub use params::IdentityParams;
pub use phone::PhoneNumber;
pub use time::{TimestampMillis, TimestampNanos, NANOS_PER_MILLI};
pub use user::UserId;
