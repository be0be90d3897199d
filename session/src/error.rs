//! Session error type.

use thiserror::Error;
use veridian_provider::ProviderError;

/// Faults surfaced by the session runtime.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
