//! Nullable identity provider — deterministic logins for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use veridian_provider::{DataRequest, IdentityProvider, Login, ProviderError};
use veridian_types::SessionIdentity;

/// A deterministic identity provider that never touches the network.
///
/// Returns a scripted identity and data request, and counts every boundary
/// call so tests can assert memoization and teardown behavior.
pub struct NullProvider {
    identity: SessionIdentity,
    data_request: Option<DataRequest>,
    fail_initialize: bool,
    fail_login: bool,
    init_calls: AtomicU32,
    login_calls: AtomicU32,
    logout_calls: AtomicU32,
    login_urls: Mutex<Vec<String>>,
}

impl NullProvider {
    /// Provider that logs in as the given identity.
    pub fn new(identity: SessionIdentity) -> Self {
        Self {
            identity,
            data_request: None,
            fail_initialize: false,
            fail_login: false,
            init_calls: AtomicU32::new(0),
            login_calls: AtomicU32::new(0),
            logout_calls: AtomicU32::new(0),
            login_urls: Mutex::new(Vec::new()),
        }
    }

    /// Attach a data request to every login.
    pub fn with_data_request(mut self, request: DataRequest) -> Self {
        self.data_request = Some(request);
        self
    }

    /// Make `initialize` fail.
    pub fn failing_initialize(mut self) -> Self {
        self.fail_initialize = true;
        self
    }

    /// Make `login` fail.
    pub fn failing_login(mut self) -> Self {
        self.fail_login = true;
        self
    }

    pub fn init_calls(&self) -> u32 {
        self.init_calls.load(Ordering::SeqCst)
    }

    pub fn login_calls(&self) -> u32 {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn logout_calls(&self) -> u32 {
        self.logout_calls.load(Ordering::SeqCst)
    }

    /// Provider URLs seen by `login`, in call order.
    pub fn login_urls(&self) -> Vec<String> {
        self.login_urls.lock().unwrap().clone()
    }
}

impl IdentityProvider for NullProvider {
    async fn initialize(&self) -> Result<(), ProviderError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_initialize {
            return Err(ProviderError::Initialization("nulled".to_string()));
        }
        Ok(())
    }

    async fn login(&self, provider_url: &str) -> Result<Login, ProviderError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.login_urls
            .lock()
            .unwrap()
            .push(provider_url.to_string());
        if self.fail_login {
            return Err(ProviderError::Login("nulled".to_string()));
        }
        Ok(Login {
            identity: self.identity.clone(),
            data_request: self.data_request.clone(),
        })
    }

    async fn logout(&self) -> Result<(), ProviderError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
