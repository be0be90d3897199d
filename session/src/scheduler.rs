//! Proactive-logout scheduling.
//!
//! A session ends slightly before its delegation truly expires, so an
//! already-invalid credential is never presented. Sessions already near
//! end-of-life fire immediately instead of arming a far-future timer.

use crate::expiry::{session_expiry, SessionExpiry};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use veridian_types::{IdentityParams, SessionIdentity, TimestampMillis};

/// When the proactive logout should fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogoutSchedule {
    /// The identity carries no delegation; there is nothing to schedule.
    NotRequired,
    /// The session is already near end-of-life; log out now.
    Immediate,
    /// Log out after this many milliseconds.
    After(u64),
}

/// Compute the logout schedule for `identity` at wall-clock `now`.
///
/// The delay is `expiry − now − logout_safety_margin_ms` (saturating);
/// delays at or below `imminent_logout_threshold_ms` collapse to
/// `Immediate`.
pub fn schedule_logout(
    identity: &SessionIdentity,
    now: TimestampMillis,
    params: &IdentityParams,
) -> LogoutSchedule {
    match session_expiry(identity) {
        SessionExpiry::Unbounded => LogoutSchedule::NotRequired,
        SessionExpiry::At(expiry) => {
            let raw_delay = now
                .until(expiry)
                .saturating_sub(params.logout_safety_margin_ms);
            if raw_delay <= params.imminent_logout_threshold_ms {
                LogoutSchedule::Immediate
            } else {
                LogoutSchedule::After(raw_delay)
            }
        }
    }
}

/// Await the schedule.
///
/// Resolves exactly once and is not cancellable from inside: on a
/// delegation refresh the caller drops the stale future and reschedules.
/// `NotRequired` never resolves.
pub async fn wait(schedule: LogoutSchedule) {
    match schedule {
        LogoutSchedule::NotRequired => std::future::pending::<()>().await,
        LogoutSchedule::Immediate => {}
        LogoutSchedule::After(delay_ms) => {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
    }
}
