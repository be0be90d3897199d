//! Memoized, process-wide provider handle.

use crate::client::{IdentityProvider, Login, ProviderError};
use tokio::sync::OnceCell;

/// Lazily-initialized handle around an identity provider.
///
/// Initialization is idempotent and memoized: concurrent and repeated
/// callers share a single underlying `initialize`, which never re-runs once
/// it has succeeded. A failed initialization leaves the cell empty, so the
/// next caller attempts it again.
pub struct ProviderHandle<P> {
    provider: P,
    init: OnceCell<()>,
}

impl<P: IdentityProvider> ProviderHandle<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            init: OnceCell::new(),
        }
    }

    /// The provider, initialized exactly once.
    pub async fn get(&self) -> Result<&P, ProviderError> {
        self.init
            .get_or_try_init(|| self.provider.initialize())
            .await?;
        Ok(&self.provider)
    }

    /// Log in against `provider_url`, initializing first if needed.
    pub async fn login(&self, provider_url: &str) -> Result<Login, ProviderError> {
        self.get().await?.login(provider_url).await
    }

    /// Log out, initializing first if needed.
    pub async fn logout(&self) -> Result<(), ProviderError> {
        self.get().await?.logout().await
    }

    /// The wrapped provider, without triggering initialization.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Consume the handle, returning the wrapped provider.
    pub fn into_inner(self) -> P {
        self.provider
    }
}
