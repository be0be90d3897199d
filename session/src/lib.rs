//! Session lifecycle for a delegated identity.
//!
//! Computes when a session's delegation chain expires, schedules a
//! proactive logout slightly ahead of that instant, and runs the
//! login → timer → logout loop against the identity-provider boundary.
//! Also carries the host-facing plumbing: code delivery fan-out, TOML
//! configuration, and logging initialisation.

pub mod config;
pub mod delivery;
pub mod error;
pub mod expiry;
pub mod logging;
pub mod runner;
pub mod scheduler;

pub use config::SessionConfig;
pub use delivery::{deliver_codes, deliver_pending};
pub use error::SessionError;
pub use expiry::{chain_expiry, session_expiry, SessionExpiry};
pub use logging::{init_logging, LogFormat};
pub use runner::{data_response, Session, SessionEnd, SessionRunner};
pub use scheduler::{schedule_logout, wait, LogoutSchedule};
