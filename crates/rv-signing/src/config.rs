//! Verification configuration from environment variables.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RV_VERIFICATION_MODE` | `informational` | `disabled`, `informational` or `enforced` |
//! | `RV_NONCE_SIZE` | `12` | Bytes of random nonce attached to each request |

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default nonce length in bytes.
pub const DEFAULT_NONCE_SIZE: usize = 12;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid verification mode: {0}")]
    InvalidMode(String),

    #[error("Invalid nonce size: {0}")]
    InvalidNonceSize(String),
}

/// How strongly the HTTP layer wants responses verified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMode {
    /// No public key is configured; every response is `NotRequested`
    Disabled,
    /// Results are computed and reported, never turned into errors
    #[default]
    Informational,
    /// A `Failed` result is an error
    Enforced,
}

impl VerificationMode {
    pub fn is_enabled(self) -> bool {
        self != VerificationMode::Disabled
    }
}

impl FromStr for VerificationMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "disabled" => Ok(VerificationMode::Disabled),
            "informational" => Ok(VerificationMode::Informational),
            "enforced" => Ok(VerificationMode::Enforced),
            other => Err(ConfigError::InvalidMode(other.to_string())),
        }
    }
}

/// Names of the headers that carry verification data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderNames {
    pub signature: String,
    pub request_date: String,
    pub etag: String,
    pub nonce: String,
}

impl Default for HeaderNames {
    fn default() -> Self {
        Self {
            signature: "X-Signature".to_string(),
            request_date: "X-RevenueCat-Request-Time".to_string(),
            etag: "X-RevenueCat-ETag".to_string(),
            nonce: "X-Nonce".to_string(),
        }
    }
}

/// Response verification settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    pub mode: VerificationMode,
    pub nonce_size: usize,
    pub headers: HeaderNames,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            mode: VerificationMode::default(),
            nonce_size: DEFAULT_NONCE_SIZE,
            headers: HeaderNames::default(),
        }
    }
}

impl VerificationConfig {
    /// Configuration with the given mode and default everything else.
    pub fn with_mode(mode: VerificationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Unset variables fall back to defaults; set but unparseable ones are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(mode) = env::var("RV_VERIFICATION_MODE") {
            config.mode = mode.parse()?;
        }

        if let Ok(size) = env::var("RV_NONCE_SIZE") {
            config.nonce_size = size
                .parse()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::InvalidNonceSize(size))?;
        }

        Ok(config)
    }
}
