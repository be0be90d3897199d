//! Code-delivery boundary — email and SMS senders.

use thiserror::Error;
use veridian_types::PhoneNumber;

/// Faults surfaced by a delivery channel.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("email delivery failed: {0}")]
    Email(String),

    #[error("sms delivery failed: {0}")]
    Sms(String),
}

/// Delivers issued verification codes to their targets.
pub trait CodeSender {
    async fn send_email(&self, address: &str, code: &str) -> Result<(), DeliveryError>;

    async fn send_sms(&self, number: &PhoneNumber, code: &str) -> Result<(), DeliveryError>;
}
