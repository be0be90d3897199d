//! Session configuration with TOML file support.

use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use veridian_types::IdentityParams;

/// Configuration for a Veridian session host.
///
/// Can be loaded from a TOML file via [`SessionConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Identity-provider URL logins are directed to.
    #[serde(default = "default_provider_url")]
    pub provider_url: String,

    /// Identity parameters (service-governed, not read from TOML).
    #[serde(skip)]
    pub params: IdentityParams,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl SessionConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, SessionError> {
        toml::from_str(raw).map_err(|e| SessionError::Config(e.to_string()))
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, SessionError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            provider_url: default_provider_url(),
            params: IdentityParams::veridian_defaults(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_provider_url() -> String {
    "https://identity.veridian.dev".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
