//! # Signature Parameters
//!
//! The values a response signature covers, and their canonical byte form.

/// Inputs bound into a response signature.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignatureParameters {
    /// Response body; `None` for bodiless responses such as `304 Not Modified`
    pub message: Option<Vec<u8>>,
    /// Nonce the client attached to the request
    pub nonce: Option<Vec<u8>>,
    /// ETag of the cached response being revalidated
    pub etag: Option<String>,
    /// Milliseconds since epoch, as reported by the server
    pub request_date: u64,
}

impl SignatureParameters {
    /// Parameters for a response signed at `request_date`.
    pub fn new(request_date: u64) -> Self {
        Self {
            request_date,
            ..Self::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<Vec<u8>>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_nonce(mut self, nonce: impl Into<Vec<u8>>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    pub fn with_etag(mut self, etag: impl Into<String>) -> Self {
        self.etag = Some(etag.into());
        self
    }

    /// Canonical serialization:
    /// `nonce || ascii_decimal(request_date) || utf8(etag) || message`.
    ///
    /// Absent fields contribute no bytes, matching what the signing server
    /// produces.
    pub fn to_bytes(&self) -> Vec<u8> {
        let request_date = self.request_date.to_string();
        let nonce = self.nonce.as_deref().unwrap_or_default();
        let etag = self.etag.as_deref().unwrap_or_default().as_bytes();
        let message = self.message.as_deref().unwrap_or_default();

        let mut bytes =
            Vec::with_capacity(nonce.len() + request_date.len() + etag.len() + message.len());
        bytes.extend_from_slice(nonce);
        bytes.extend_from_slice(request_date.as_bytes());
        bytes.extend_from_slice(etag);
        bytes.extend_from_slice(message);
        bytes
    }

    /// The exact message the intermediate key signs: `salt || to_bytes()`.
    pub fn signed_message(&self, salt: &[u8]) -> Vec<u8> {
        let mut bytes = salt.to_vec();
        bytes.extend_from_slice(&self.to_bytes());
        bytes
    }
}
