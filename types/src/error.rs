//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for the Veridian identity service.
///
/// Domain outcomes (registration, send, confirm) are NOT errors — they are
/// closed response enums matched exhaustively by callers. This type covers
/// genuine faults only.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("unknown user: {0}")]
    UnknownUser(String),

    #[error("{0}")]
    Other(String),
}
