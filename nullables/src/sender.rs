//! Nullable code sender — records deliveries instead of performing them.

use std::sync::Mutex;
use veridian_provider::{CodeSender, DeliveryError};
use veridian_types::PhoneNumber;
use veridian_verification::CodeTarget;

/// A delivery recorded by [`NullCodeSender`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentCode {
    pub target: CodeTarget,
    pub code: String,
}

/// A code sender that records every delivery and never sends anything.
#[derive(Default)]
pub struct NullCodeSender {
    sent: Mutex<Vec<SentCode>>,
    fail_all: bool,
}

impl NullCodeSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every delivery fail.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_all: true,
        }
    }

    /// Deliveries recorded so far, in call order.
    pub fn sent(&self) -> Vec<SentCode> {
        self.sent.lock().unwrap().clone()
    }
}

impl CodeSender for NullCodeSender {
    async fn send_email(&self, address: &str, code: &str) -> Result<(), DeliveryError> {
        if self.fail_all {
            return Err(DeliveryError::Email("nulled".to_string()));
        }
        self.sent.lock().unwrap().push(SentCode {
            target: CodeTarget::Email(address.to_string()),
            code: code.to_string(),
        });
        Ok(())
    }

    async fn send_sms(&self, number: &PhoneNumber, code: &str) -> Result<(), DeliveryError> {
        if self.fail_all {
            return Err(DeliveryError::Sms("nulled".to_string()));
        }
        self.sent.lock().unwrap().push(SentCode {
            target: CodeTarget::Phone(number.clone()),
            code: code.to_string(),
        });
        Ok(())
    }
}
