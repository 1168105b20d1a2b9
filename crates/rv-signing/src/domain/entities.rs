//! # Domain Entities
//!
//! The HTTP exchange as seen by the verification layer, and the tri-state
//! result attached to every response.

use std::fmt;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method, StatusCode};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

// =============================================================================
// Verification Result
// =============================================================================

/// Outcome of response verification, computed once per response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationResult {
    /// The caller did not ask for verification
    NotRequested,
    /// Signature present, well-formed and cryptographically valid
    Verified,
    /// Verification was required and did not succeed
    Failed,
}

impl VerificationResult {
    pub fn is_verified(self) -> bool {
        self == VerificationResult::Verified
    }

    /// Metric / display label.
    pub fn as_str(self) -> &'static str {
        match self {
            VerificationResult::NotRequested => "not_requested",
            VerificationResult::Verified => "verified",
            VerificationResult::Failed => "failed",
        }
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Request
// =============================================================================

/// The request half of an exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    /// Random value the server must bind into its signature
    pub nonce: Option<Vec<u8>>,
}

impl HttpRequest {
    /// A request that does not ask for a nonce-bound signature.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            nonce: None,
        }
    }

    /// A request carrying a fresh random nonce of `nonce_size` bytes.
    pub fn with_nonce(method: Method, path: impl Into<String>, nonce_size: usize) -> Self {
        let mut nonce = vec![0u8; nonce_size];
        OsRng.fill_bytes(&mut nonce);
        Self {
            nonce: Some(nonce),
            ..Self::new(method, path)
        }
    }

    /// Headers the HTTP layer must send: the base64 nonce, if any.
    pub fn request_headers(&self, nonce_header: &str) -> Result<HeaderMap, http::Error> {
        let mut headers = HeaderMap::new();
        if let Some(nonce) = &self.nonce {
            headers.insert(
                HeaderName::try_from(nonce_header)?,
                HeaderValue::try_from(B64.encode(nonce))?,
            );
        }
        Ok(headers)
    }
}

impl fmt::Display for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

// =============================================================================
// Response
// =============================================================================

/// The response half of an exchange.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// `None` when the response had no body at all
    pub body: Option<Vec<u8>>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: Option<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body,
        }
    }

    /// Header value by name, case-insensitively.
    ///
    /// A repeated header yields its first value. Values that are not visible
    /// ASCII read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    pub fn is_not_modified(&self) -> bool {
        self.status == StatusCode::NOT_MODIFIED
    }
}

impl From<http::Response<Option<Vec<u8>>>> for HttpResponse {
    fn from(response: http::Response<Option<Vec<u8>>>) -> Self {
        let (parts, body) = response.into_parts();
        Self {
            status: parts.status,
            headers: parts.headers,
            body,
        }
    }
}

/// A response with its verification outcome attached. Never mutated after
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedResponse {
    response: HttpResponse,
    verification_result: VerificationResult,
}

impl VerifiedResponse {
    pub fn new(response: HttpResponse, verification_result: VerificationResult) -> Self {
        Self {
            response,
            verification_result,
        }
    }

    pub fn response(&self) -> &HttpResponse {
        &self.response
    }

    pub fn verification_result(&self) -> VerificationResult {
        self.verification_result
    }

    pub fn into_response(self) -> HttpResponse {
        self.response
    }
}
