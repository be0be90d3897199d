//! Nullable infrastructure for deterministic testing.
//!
//! The external dependencies of a session host (clock, identity provider,
//! code delivery) are abstracted behind traits or injected timestamps. This
//! crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod provider;
pub mod sender;

pub use clock::NullClock;
pub use provider::NullProvider;
pub use sender::{NullCodeSender, SentCode};
