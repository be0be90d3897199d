//! Immutable identity profile aggregate.
//!
//! A [`Profile`] is a value: every update operation returns a fresh profile
//! and leaves its input untouched. Holders therefore always see a consistent
//! snapshot and concurrent reads need no locking.

pub mod apps;
pub mod profile;

pub use apps::{AppDirectory, ClientApp};
pub use profile::{EmailFacet, Identity, PhoneFacet, Profile};
