//! Delegated session identity and its delegation chain.

use crate::time::TimestampNanos;
use serde::{Deserialize, Serialize};

/// A single time-bounded authorization grant.
///
/// Cryptographic verification of the grant is the identity provider's
/// concern; Veridian only consumes the expiration instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegation {
    /// Instant at which this delegation stops being valid.
    pub expiration: TimestampNanos,
}

impl Delegation {
    pub fn new(expiration: TimestampNanos) -> Self {
        Self { expiration }
    }
}

/// An ordered sequence of delegations.
///
/// The chain is only as strong as its weakest member: it is valid exactly
/// as long as every delegation in it is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationChain {
    pub delegations: Vec<Delegation>,
}

impl DelegationChain {
    pub fn new(delegations: Vec<Delegation>) -> Self {
        Self { delegations }
    }

    pub fn is_empty(&self) -> bool {
        self.delegations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.delegations.len()
    }
}

/// The cryptographic identity a session authenticates with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionIdentity {
    /// An identity with no delegation — it never expires.
    Direct,
    /// An identity acting through a chain of time-bounded delegations.
    Delegated(DelegationChain),
}

impl SessionIdentity {
    /// The delegation chain, if this identity carries one.
    pub fn delegation_chain(&self) -> Option<&DelegationChain> {
        match self {
            Self::Direct => None,
            Self::Delegated(chain) => Some(chain),
        }
    }
}
