//! Fan-out delivery of issued verification codes.
//!
//! The registry only records that a code was issued; getting it to the
//! user's mailbox or phone happens here, through the [`CodeSender`]
//! boundary. Deliveries for one batch run concurrently.

use futures_util::future::join_all;
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, warn};
use veridian_provider::{CodeSender, DeliveryError};
use veridian_verification::{CodeTarget, IdentityRegistry, VerificationEvent};

/// Deliver every `CodeIssued` event in `events` through `sender`.
///
/// Failed deliveries are logged and skipped; returns the number delivered.
pub async fn deliver_codes<S: CodeSender>(events: &[VerificationEvent], sender: &S) -> usize {
    let deliveries: Vec<Pin<Box<dyn Future<Output = Result<(), DeliveryError>> + '_>>> = events
        .iter()
        .filter_map(|event| match event {
            VerificationEvent::CodeIssued { target, code, .. } => {
                Some(dispatch(sender, target, code))
            }
            _ => None,
        })
        .collect();

    let results = join_all(deliveries).await;
    let delivered = results.iter().filter(|r| r.is_ok()).count();
    for error in results.into_iter().filter_map(Result::err) {
        warn!(%error, "verification code delivery failed");
    }
    delivered
}

/// Drain the registry's pending events and deliver the issued codes.
pub async fn deliver_pending<S: CodeSender>(
    registry: &mut IdentityRegistry,
    sender: &S,
) -> usize {
    let events = registry.drain_events();
    debug!(events = events.len(), "draining verification events");
    deliver_codes(&events, sender).await
}

fn dispatch<'a, S: CodeSender>(
    sender: &'a S,
    target: &'a CodeTarget,
    code: &'a str,
) -> Pin<Box<dyn Future<Output = Result<(), DeliveryError>> + 'a>> {
    match target {
        CodeTarget::Email(address) => Box::pin(sender.send_email(address, code)),
        CodeTarget::Phone(number) => Box::pin(sender.send_sms(number, code)),
    }
}
