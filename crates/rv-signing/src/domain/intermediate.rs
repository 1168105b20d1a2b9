//! # Intermediate Key Validation
//!
//! Establishes trust in the intermediate key carried inside a signature blob
//! before it is used to check the payload.
//!
//! Nothing is cached: every blob re-proves its intermediate key against the
//! root, so rotation and revocation take effect on the next response.

use ed25519_dalek::{Signature, VerifyingKey};

use super::errors::SignatureError;
use super::keys::PublicKey;
use super::layout::IntermediateKeyExpiration;
use crate::ports::outbound::Clock;

/// Checks an intermediate key against a trusted root key.
pub struct IntermediateKeyValidator<'a> {
    root: &'a PublicKey,
    clock: &'a dyn Clock,
}

impl<'a> IntermediateKeyValidator<'a> {
    pub fn new(root: &'a PublicKey, clock: &'a dyn Clock) -> Self {
        Self { root, clock }
    }

    /// Validate `key` and return it as a usable public key.
    ///
    /// 1. `signature` must be the root key's signature over `expiration || key`
    /// 2. `expiration` must not be the zero sentinel
    /// 3. the expiration date must be strictly after now
    pub fn validate(
        &self,
        key: &[u8; 32],
        expiration: IntermediateKeyExpiration,
        signature: &[u8; 64],
    ) -> Result<PublicKey, SignatureError> {
        let mut signed = Vec::with_capacity(expiration.as_bytes().len() + key.len());
        signed.extend_from_slice(expiration.as_bytes());
        signed.extend_from_slice(key);

        self.root
            .verify_strict(&signed, &Signature::from_bytes(signature))
            .map_err(|_| SignatureError::IntermediateKeyFailedVerification)?;

        let expires_at = expiration
            .to_date()
            .ok_or(SignatureError::IntermediateKeyInvalid(expiration.days()))?;
        if expires_at <= self.clock.now() {
            return Err(SignatureError::IntermediateKeyExpired(expires_at));
        }

        VerifyingKey::from_bytes(key).map_err(|_| SignatureError::IntermediateKeyFailedVerification)
    }
}
