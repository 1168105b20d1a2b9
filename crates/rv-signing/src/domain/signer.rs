//! # Response Signer
//!
//! Signer side of the wire format. Produces blobs the verifier accepts,
//! for backend stubs, fixtures and tooling.

use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;
use rand::RngCore;

use super::layout::{IntermediateKeyExpiration, SignatureBlob, SignatureComponent};
use super::parameters::SignatureParameters;

/// Signs responses with an intermediate key certified by a root key.
pub struct ResponseSigner {
    intermediate: SigningKey,
    expiration: IntermediateKeyExpiration,
    certificate: [u8; 64],
}

impl ResponseSigner {
    /// Certify `intermediate` with `root` until `expiration`.
    pub fn new(
        root: &SigningKey,
        intermediate: SigningKey,
        expiration: IntermediateKeyExpiration,
    ) -> Self {
        let mut message = expiration.as_bytes().to_vec();
        message.extend_from_slice(intermediate.verifying_key().as_bytes());
        let certificate = root.sign(&message).to_bytes();

        Self::with_certificate(intermediate, expiration, certificate)
    }

    /// Use a certificate issued elsewhere; the root private key is not needed.
    pub fn with_certificate(
        intermediate: SigningKey,
        expiration: IntermediateKeyExpiration,
        certificate: [u8; 64],
    ) -> Self {
        Self {
            intermediate,
            expiration,
            certificate,
        }
    }

    /// Sign `parameters` with a caller-chosen salt.
    pub fn sign(&self, parameters: &SignatureParameters, salt: [u8; 16]) -> SignatureBlob {
        let payload = self
            .intermediate
            .sign(&parameters.signed_message(&salt))
            .to_bytes();

        SignatureBlob {
            intermediate_public_key: self.intermediate.verifying_key().to_bytes(),
            intermediate_key_expiration: self.expiration,
            intermediate_key_signature: self.certificate,
            salt,
            payload,
        }
    }

    /// Sign `parameters` with a fresh random salt.
    pub fn sign_with_random_salt(&self, parameters: &SignatureParameters) -> SignatureBlob {
        let mut salt = [0u8; SignatureComponent::Salt.size()];
        OsRng.fill_bytes(&mut salt);
        self.sign(parameters, salt)
    }
}

/// Builders shared by unit tests, integration tests and benchmarks.
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use chrono::{Duration, TimeZone, Utc};

    /// Generate a random Ed25519 signing key.
    pub fn generate_key() -> SigningKey {
        SigningKey::generate(&mut OsRng)
    }

    /// Fixed "now" for tests: 2024-03-10 12:00 UTC.
    pub fn test_clock() -> FixedClock {
        FixedClock(
            Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0)
                .single()
                .expect("fixed test date is unambiguous"),
        )
    }

    /// A root key plus a signer whose intermediate key expires `days` after
    /// [`test_clock`] (negative for the past).
    pub fn signer_expiring_in(days: i64) -> (SigningKey, ResponseSigner) {
        let root = generate_key();
        let expiration = IntermediateKeyExpiration::from_date(test_clock().0 + Duration::days(days));
        let signer = ResponseSigner::new(&root, generate_key(), expiration);
        (root, signer)
    }
}
