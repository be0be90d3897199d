//! Session runtime: login, proactive-logout timer, teardown.

use crate::error::SessionError;
use crate::scheduler::{self, LogoutSchedule};
use tracing::{debug, info, warn};
use veridian_provider::{DataRequest, DataResponse, IdentityProvider, ProviderHandle};
use veridian_types::{IdentityParams, SessionIdentity, TimestampMillis, UserId};
use veridian_verification::{IdentityRegistry, VisibleAttributesResponse};

/// An authenticated session and its logout schedule.
#[derive(Clone, Debug)]
pub struct Session {
    pub identity: SessionIdentity,
    /// The originating client app's data request, if the login carried one.
    pub data_request: Option<DataRequest>,
    pub started_at: TimestampMillis,
    pub schedule: LogoutSchedule,
}

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The identity carries no delegation; the session never expires and
    /// no proactive logout was performed.
    NoExpiry,
    /// The proactive-logout timer fired ahead of delegation expiry and the
    /// provider session was ended.
    ProactiveLogout,
}

/// Drives the session lifecycle against an identity provider.
pub struct SessionRunner<P> {
    handle: ProviderHandle<P>,
    params: IdentityParams,
}

impl<P: IdentityProvider> SessionRunner<P> {
    pub fn new(provider: P, params: IdentityParams) -> Self {
        Self {
            handle: ProviderHandle::new(provider),
            params,
        }
    }

    /// The memoized provider handle.
    pub fn handle(&self) -> &ProviderHandle<P> {
        &self.handle
    }

    /// Log in and compute the logout schedule for the returned identity.
    pub async fn begin(
        &self,
        provider_url: &str,
        now: TimestampMillis,
    ) -> Result<Session, SessionError> {
        let login = self.handle.login(provider_url).await?;
        let schedule = scheduler::schedule_logout(&login.identity, now, &self.params);
        info!(?schedule, "session started");

        Ok(Session {
            identity: login.identity,
            data_request: login.data_request,
            started_at: now,
            schedule,
        })
    }

    /// Await the proactive-logout timer, then log out.
    ///
    /// Resolves once. On a delegation refresh the caller drops this future
    /// (the stale timer with it) and calls [`begin`] again with the fresh
    /// chain.
    ///
    /// [`begin`]: SessionRunner::begin
    pub async fn run_to_logout(&self, session: &Session) -> Result<SessionEnd, SessionError> {
        match session.schedule {
            LogoutSchedule::NotRequired => {
                debug!("identity carries no delegation; no proactive logout");
                return Ok(SessionEnd::NoExpiry);
            }
            LogoutSchedule::Immediate => {
                warn!("session already near end-of-life; logging out now");
            }
            LogoutSchedule::After(delay_ms) => {
                debug!(delay_ms, "proactive logout armed");
            }
        }

        scheduler::wait(session.schedule).await;
        self.handle.logout().await?;
        info!("session ended ahead of delegation expiry");
        Ok(SessionEnd::ProactiveLogout)
    }
}

/// The attribute ids released back to the originating client app, per the
/// registry's visibility policy. `None` when the identity is unknown.
pub fn data_response(registry: &IdentityRegistry, user: &UserId) -> Option<DataResponse> {
    match registry.visible_attributes(user) {
        VisibleAttributesResponse::NotFound => None,
        VisibleAttributesResponse::Attributes(attribute_ids) => {
            Some(DataResponse { attribute_ids })
        }
    }
}
