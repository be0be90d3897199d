//! Timestamp types used throughout Veridian.
//!
//! Wall-clock times are Unix epoch milliseconds (UTC). Delegation
//! expirations arrive from the identity provider as epoch nanoseconds and
//! must be converted with [`TimestampNanos::to_millis`] before they are
//! compared or subtracted against wall-clock values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Nanoseconds per millisecond — the only sanctioned unit bridge.
pub const NANOS_PER_MILLI: u64 = 1_000_000;

/// A Unix timestamp in milliseconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimestampMillis(u64);

impl TimestampMillis {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(millis: u64) -> Self {
        Self(millis)
    }

    /// Get the current system time as a `TimestampMillis`.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_millis() as u64;
        Self(millis)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Milliseconds elapsed since this timestamp (relative to `now`).
    pub fn elapsed_since(&self, now: TimestampMillis) -> u64 {
        now.0.saturating_sub(self.0)
    }

    /// Milliseconds remaining until `later`, saturating at zero.
    pub fn until(&self, later: TimestampMillis) -> u64 {
        later.0.saturating_sub(self.0)
    }

    /// Whether this timestamp + window has passed relative to `now`.
    pub fn has_expired(&self, window_millis: u64, now: TimestampMillis) -> bool {
        now.0 >= self.0.saturating_add(window_millis)
    }
}

impl fmt::Display for TimestampMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// A Unix timestamp in nanoseconds since epoch (UTC).
///
/// The scale delegation expirations are carried in on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimestampNanos(u64);

impl TimestampNanos {
    pub fn new(nanos: u64) -> Self {
        Self(nanos)
    }

    pub fn as_nanos(&self) -> u64 {
        self.0
    }

    /// Convert to the wall-clock millisecond scale (truncating division).
    pub fn to_millis(&self) -> TimestampMillis {
        TimestampMillis(self.0 / NANOS_PER_MILLI)
    }
}

impl fmt::Display for TimestampNanos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.0)
    }
}
