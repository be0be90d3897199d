//! Identity-provider client boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use veridian_types::{AttributeId, SessionIdentity};

/// Faults surfaced by the identity provider.
///
/// The core never retries login or logout: these propagate to the caller
/// unrecovered.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider initialization failed: {0}")]
    Initialization(String),

    #[error("login failed: {0}")]
    Login(String),

    #[error("logout failed: {0}")]
    Logout(String),
}

/// A client app's request for profile data, captured at login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRequest {
    /// Origin URL of the requesting relying party.
    pub origin: String,
}

impl DataRequest {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }
}

/// The attribute ids released back to the requesting client app.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResponse {
    pub attribute_ids: Vec<AttributeId>,
}

/// A successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Login {
    /// The identity the session authenticates with.
    pub identity: SessionIdentity,
    /// Present when a client app initiated the login to request data.
    pub data_request: Option<DataRequest>,
}

/// The external identity-provider service.
///
/// A black-box collaborator: its wire protocol is out of scope here.
/// `initialize` must be idempotent — [`ProviderHandle`] memoizes it, but an
/// implementation may still see it awaited more than once across handles.
///
/// [`ProviderHandle`]: crate::handle::ProviderHandle
pub trait IdentityProvider {
    /// Prepare the underlying client.
    async fn initialize(&self) -> Result<(), ProviderError>;

    /// Authenticate against `provider_url`.
    async fn login(&self, provider_url: &str) -> Result<Login, ProviderError>;

    /// End the provider-side session.
    async fn logout(&self) -> Result<(), ProviderError>;
}
