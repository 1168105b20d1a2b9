//! # Response Signing Verification
//!
//! Validates server-signed HTTP responses against a compiled-in trust root.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Wire layout, canonical parameters, key chain checks. No I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Adapters Layer** (`adapters/`): Clock and logging implementations
//! - **Service Layer** (`service.rs`): Per-exchange policy producing a [`VerificationResult`]
//!
//! ## Trust Model
//!
//! - The root key is embedded at build time and never changes at runtime
//! - Every signature blob carries its own intermediate key, certified by the root
//!   key with an expiration date, and re-validated on every call
//! - The intermediate key signs `salt || nonce || request_date || etag || body`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rv_signing::{ResponseVerificationApi, ResponseVerifier, VerificationConfig};
//!
//! let verifier = ResponseVerifier::new(VerificationConfig::from_env()?);
//! let request = verifier.create_request(Method::GET, "/v1/subscribers/login");
//! // ... perform the HTTP call ...
//! let verified = verifier.verify(&request, response);
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;
pub mod verifier;

// Re-export public API
pub use adapters::clock::{FixedClock, SystemClock};
pub use adapters::logging::{LogRecord, RecordingLogger, TracingLogger};
pub use config::{ConfigError, HeaderNames, VerificationConfig, VerificationMode};
pub use domain::entities::{HttpRequest, HttpResponse, VerificationResult, VerifiedResponse};
pub use domain::errors::{ResponseVerificationError, SignatureError};
pub use domain::intermediate::IntermediateKeyValidator;
pub use domain::keys::{KeyStore, PublicKey};
pub use domain::layout::{IntermediateKeyExpiration, SignatureBlob, SignatureComponent};
pub use domain::parameters::SignatureParameters;
pub use domain::signer::ResponseSigner;
#[cfg(any(test, feature = "test-helpers"))]
pub use domain::signer::test_helpers;
pub use ports::inbound::ResponseVerificationApi;
pub use ports::outbound::{Clock, VerificationLogger};
pub use service::ResponseVerifier;
pub use verifier::SignatureVerifier;

pub use http::{HeaderMap, Method, StatusCode};
