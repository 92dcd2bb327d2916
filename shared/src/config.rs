//! # Configuration for the Pairing API Client
//!
//! Configuration can be built from defaults, deserialized from a file,
//! or loaded from environment variables.

use crate::constants::*;
use crate::error::{PairingError, PairingResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use url::Url;

// =============================================================================
// PAIRING CLIENT CONFIGURATION
// =============================================================================

/// Configuration for the pairing client and its HTTP transport
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PairingClientConfig {
    /// Pairing service origin, optionally with a path prefix
    pub pairing_url: String,

    /// Total request timeout in seconds
    pub request_timeout_secs: u64,

    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for PairingClientConfig {
    fn default() -> Self {
        Self {
            pairing_url: DEFAULT_PAIRING_URL.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

impl PairingClientConfig {
    /// Create a configuration for the given pairing URL with default timeouts
    pub fn new(pairing_url: impl Into<String>) -> Self {
        Self {
            pairing_url: pairing_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> PairingResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> PairingResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_PAIRING_URL) {
            config.pairing_url = url;
        }

        if let Some(secs) = lookup(ENV_PAIRING_TIMEOUT_SECS) {
            config.request_timeout_secs = parse_secs(ENV_PAIRING_TIMEOUT_SECS, &secs)?;
        }

        if let Some(secs) = lookup(ENV_PAIRING_CONNECT_TIMEOUT_SECS) {
            config.connect_timeout_secs = parse_secs(ENV_PAIRING_CONNECT_TIMEOUT_SECS, &secs)?;
        }

        Ok(config)
    }

    /// Replace the URL and request timeout where a value is given
    pub fn with_overrides(
        mut self,
        pairing_url: Option<String>,
        request_timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(pairing_url) = pairing_url {
            self.pairing_url = pairing_url;
        }
        if let Some(secs) = request_timeout_secs {
            self.request_timeout_secs = secs;
        }
        self
    }

    /// Parse the pairing URL, accepting only absolute http(s) URLs
    pub fn base_url(&self) -> PairingResult<Url> {
        let url = Url::parse(&self.pairing_url)?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(PairingError::InvalidUrl(format!(
                    "unsupported scheme '{}' in '{}'",
                    other, self.pairing_url
                )))
            }
        }

        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(PairingError::InvalidUrl(format!(
                "'{}' has no host",
                self.pairing_url
            )));
        }

        Ok(url)
    }

    /// Total request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Connect timeout
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> PairingResult<()> {
        self.base_url()?;

        if self.request_timeout_secs == 0 {
            return Err(PairingError::ConfigurationError(
                "request timeout must be greater than zero".into(),
            ));
        }

        if self.connect_timeout_secs == 0 {
            return Err(PairingError::ConfigurationError(
                "connect timeout must be greater than zero".into(),
            ));
        }

        Ok(())
    }
}

fn parse_secs(var: &str, value: &str) -> PairingResult<u64> {
    value.trim().parse().map_err(|_| {
        PairingError::ConfigurationError(format!(
            "{} must be a number of seconds, got '{}'",
            var, value
        ))
    })
}
