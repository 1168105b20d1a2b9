//! # Verification Errors
//!
//! Error types for response signature verification.
//!
//! The `Display` text of each [`SignatureError`] variant is the diagnostic
//! logged when verification fails, so log assertions in tests match on it.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::Level;

/// Reasons a signature blob fails to verify.
///
/// None of these escape the public `verify` boundary: they are logged and
/// folded into a `false` / [`VerificationResult::Failed`](super::entities::VerificationResult).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The header value is not valid base64
    #[error("Signature is not base64: {0}")]
    NotBase64(String),

    /// The decoded blob does not have the fixed wire size
    #[error("Signature invalid size: {0} bytes")]
    InvalidSize(usize),

    /// The root key did not sign `expiration || intermediate key`
    #[error("Intermediate key failed verification")]
    IntermediateKeyFailedVerification,

    /// The expiration is the zero sentinel or outside the representable range
    #[error("Intermediate key invalid: {0}")]
    IntermediateKeyInvalid(u32),

    /// The intermediate key expired on the given date
    #[error("Intermediate key expired: {0}")]
    IntermediateKeyExpired(DateTime<Utc>),

    /// The intermediate key did not sign `salt || parameters`
    #[error("Signature failed verification")]
    SignatureFailedVerification,

    /// Key bytes are not a valid Ed25519 public key
    #[error("Invalid public key")]
    InvalidPublicKey,
}

impl SignatureError {
    /// Level at which this failure is logged.
    pub fn level(&self) -> Level {
        match self {
            SignatureError::NotBase64(_) => Level::ERROR,
            _ => Level::WARN,
        }
    }
}

/// Error surfaced to callers that run in enforcing mode.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResponseVerificationError {
    /// Verification was required and did not succeed
    #[error("Signature verification failed for {request}")]
    SignatureVerificationFailed {
        /// `METHOD path` of the offending request
        request: String,
    },
}
