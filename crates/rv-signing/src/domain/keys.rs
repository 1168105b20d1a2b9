//! # Key Store
//!
//! The compiled-in root public key: the trust anchor that certifies every
//! intermediate key. Loaded once per process and never mutated.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use ed25519_dalek::{VerifyingKey, PUBLIC_KEY_LENGTH};
use lazy_static::lazy_static;

use super::errors::SignatureError;

/// Ed25519 public key used for root and intermediate keys.
pub type PublicKey = VerifyingKey;

/// Raw root public key (`UC1upXWg5QVmyOSwozp755xLqquBKjjU+di6U8QhMlM=`).
const ROOT_PUBLIC_KEY: [u8; PUBLIC_KEY_LENGTH] = [
    0x50, 0x2D, 0x6E, 0xA5, 0x75, 0xA0, 0xE5, 0x05, 0x66, 0xC8, 0xE4, 0xB0, 0xA3, 0x3A, 0x7B, 0xE7,
    0x9C, 0x4B, 0xAA, 0xAB, 0x81, 0x2A, 0x38, 0xD4, 0xF9, 0xD8, 0xBA, 0x53, 0xC4, 0x21, 0x32, 0x53,
];

lazy_static! {
    // A malformed embedded key is a build defect; `test_root_key_loads` guards it.
    static ref ROOT_KEY: PublicKey =
        VerifyingKey::from_bytes(&ROOT_PUBLIC_KEY).expect("embedded root key is a valid Ed25519 point");
}

/// Access to the trust anchor.
pub struct KeyStore;

impl KeyStore {
    /// The process-wide root public key.
    pub fn load_public_key() -> &'static PublicKey {
        &ROOT_KEY
    }

    /// Parse a raw 32-byte Ed25519 public key.
    pub fn parse_public_key(bytes: &[u8]) -> Result<PublicKey, SignatureError> {
        let bytes: &[u8; PUBLIC_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| SignatureError::InvalidPublicKey)?;
        VerifyingKey::from_bytes(bytes).map_err(|_| SignatureError::InvalidPublicKey)
    }

    /// Parse a base64-encoded raw public key, as used for key overrides.
    pub fn public_key_from_base64(encoded: &str) -> Result<PublicKey, SignatureError> {
        let bytes = B64
            .decode(encoded.trim())
            .map_err(|_| SignatureError::InvalidPublicKey)?;
        Self::parse_public_key(&bytes)
    }
}
