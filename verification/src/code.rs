//! Verification code issuance and validity.

use rand::Rng;
use serde::{Deserialize, Serialize};
use veridian_types::TimestampMillis;

/// A code issued for an attribute awaiting confirmation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    code: String,
    issued_at: TimestampMillis,
}

impl VerificationCode {
    /// Issue a fresh numeric code of the given length.
    pub fn issue(length: u32, now: TimestampMillis) -> Self {
        Self {
            code: generate_code(length),
            issued_at: now,
        }
    }

    /// Wrap a known code value (restores, tests).
    pub fn with_code(code: impl Into<String>, issued_at: TimestampMillis) -> Self {
        Self {
            code: code.into(),
            issued_at,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn issued_at(&self) -> TimestampMillis {
        self.issued_at
    }

    /// Whether the code has outlived its validity window at `now`.
    pub fn is_expired(&self, validity_ms: u64, now: TimestampMillis) -> bool {
        self.issued_at.has_expired(validity_ms, now)
    }

    /// Compare a submitted code, ignoring surrounding whitespace.
    pub fn matches(&self, submitted: &str) -> bool {
        self.code == submitted.trim()
    }
}

/// A uniformly random numeric code, exactly `length` digits.
pub fn generate_code(length: u32) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let digit: u8 = rng.gen_range(0..=9);
            char::from(b'0' + digit)
        })
        .collect()
}
