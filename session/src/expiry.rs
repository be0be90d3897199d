//! Session expiry derived from a delegation chain.

use serde::{Deserialize, Serialize};
use veridian_types::{DelegationChain, SessionIdentity, TimestampMillis};

/// When a session's credentials stop being valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionExpiry {
    /// No delegation bounds this session.
    Unbounded,
    /// The session expires at the given wall-clock instant.
    At(TimestampMillis),
}

/// Effective expiry of a delegation chain: the minimum member expiration
/// (the chain is only as strong as its weakest delegation).
///
/// Expirations are converted to the millisecond scale before any
/// comparison. An empty chain imposes no bound.
pub fn chain_expiry(chain: &DelegationChain) -> SessionExpiry {
    chain
        .delegations
        .iter()
        .map(|d| d.expiration.to_millis())
        .min()
        .map_or(SessionExpiry::Unbounded, SessionExpiry::At)
}

/// Expiry of the identity a session authenticates with.
///
/// A non-delegated identity never expires.
pub fn session_expiry(identity: &SessionIdentity) -> SessionExpiry {
    match identity.delegation_chain() {
        None => SessionExpiry::Unbounded,
        Some(chain) => chain_expiry(chain),
    }
}
