//! Boundary traits for Veridian's external collaborators.
//!
//! The identity-provider login/logout flow and the code-delivery channels
//! are black boxes to the core: this crate defines the traits they are
//! consumed through, plus the memoizing handle that guards provider
//! initialization.

#![allow(async_fn_in_trait)]

pub mod client;
pub mod delivery;
pub mod handle;

pub use client::{DataRequest, DataResponse, IdentityProvider, Login, ProviderError};
pub use delivery::{CodeSender, DeliveryError};
pub use handle::ProviderHandle;
