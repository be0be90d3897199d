//! Identity service parameters.

use serde::{Deserialize, Serialize};

/// Tunable parameters shared across the Veridian crates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentityParams {
    /// Number of digits in an issued verification code.
    pub code_length: u32,

    /// Validity window of an issued code, in milliseconds.
    pub code_validity_ms: u64,

    /// Buffer subtracted from true expiry when scheduling proactive logout,
    /// so the session ends before its delegation is actually invalid.
    pub logout_safety_margin_ms: u64,

    /// Delays at or below this threshold fire the logout immediately rather
    /// than arming a timer for a session already near end-of-life.
    pub imminent_logout_threshold_ms: u64,
}

impl IdentityParams {
    pub const ONE_MINUTE_MS: u64 = 60 * 1000;

    /// Veridian defaults — the intended configuration for the live service.
    pub fn veridian_defaults() -> Self {
        Self {
            code_length: 6,
            code_validity_ms: 10 * Self::ONE_MINUTE_MS,
            logout_safety_margin_ms: Self::ONE_MINUTE_MS,
            imminent_logout_threshold_ms: 5 * Self::ONE_MINUTE_MS,
        }
    }
}

/// Default is the Veridian live-service configuration.
impl Default for IdentityParams {
    fn default() -> Self {
        Self::veridian_defaults()
    }
}
