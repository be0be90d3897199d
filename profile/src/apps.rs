//! Linked client applications and the origin→name display table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A relying-party application linked to the identity, recorded by its
/// origin domain. No mutation operations — membership is read-only here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientApp {
    pub domain_name: String,
}

impl ClientApp {
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
        }
    }
}

/// Read-only configuration table mapping a relying-party origin URL to a
/// human-readable application name, consulted when displaying linked apps.
#[derive(Clone, Debug, Default)]
pub struct AppDirectory {
    names: HashMap<String, String>,
}

impl AppDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from `(origin, display name)` pairs.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            names: entries
                .into_iter()
                .map(|(origin, name)| (origin.into(), name.into()))
                .collect(),
        }
    }

    /// The configured display name for an origin, if any.
    pub fn display_name(&self, origin: &str) -> Option<&str> {
        self.names.get(origin).map(String::as_str)
    }

    /// Display name for a linked app, falling back to its domain name.
    pub fn name_for<'a>(&'a self, app: &'a ClientApp) -> &'a str {
        self.display_name(&app.domain_name)
            .unwrap_or(&app.domain_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
