//! # Signature Verifier
//!
//! The predicate "does this signature prove this payload came from the trust
//! chain". Stateless apart from its injected clock and logger, and safe to
//! call concurrently.
//!
//! ## Steps
//!
//! 1. Base64-decode the header value
//! 2. Require exactly 180 bytes
//! 3. Slice the blob into its components
//! 4. Validate the intermediate key against the root key
//! 5. Verify the payload signature over `salt || parameters` with the intermediate key

use std::sync::Arc;

use ed25519_dalek::Signature;

use crate::adapters::clock::SystemClock;
use crate::adapters::logging::TracingLogger;
use crate::domain::errors::SignatureError;
use crate::domain::intermediate::IntermediateKeyValidator;
use crate::domain::keys::PublicKey;
use crate::domain::layout::SignatureBlob;
use crate::domain::parameters::SignatureParameters;
use crate::ports::outbound::{Clock, VerificationLogger};

/// Verifies full signature blobs.
#[derive(Clone)]
pub struct SignatureVerifier {
    clock: Arc<dyn Clock>,
    logger: Arc<dyn VerificationLogger>,
}

impl Default for SignatureVerifier {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(TracingLogger))
    }
}

impl SignatureVerifier {
    pub fn new(clock: Arc<dyn Clock>, logger: Arc<dyn VerificationLogger>) -> Self {
        Self { clock, logger }
    }

    /// Verify `signature` (base64) for `parameters` under the root `public_key`.
    ///
    /// Every failure is logged and reported as `false`.
    pub fn verify(
        &self,
        signature: &str,
        parameters: &SignatureParameters,
        public_key: &PublicKey,
    ) -> bool {
        match self.check(signature, parameters, public_key) {
            Ok(()) => true,
            Err(error) => {
                self.logger.log(error.level(), &error.to_string());
                false
            }
        }
    }

    /// Same as [`verify`](Self::verify) but returns the failure instead of logging it.
    pub fn check(
        &self,
        signature: &str,
        parameters: &SignatureParameters,
        public_key: &PublicKey,
    ) -> Result<(), SignatureError> {
        let blob = SignatureBlob::from_base64(signature)?;

        let intermediate_key = IntermediateKeyValidator::new(public_key, self.clock.as_ref())
            .validate(
                &blob.intermediate_public_key,
                blob.intermediate_key_expiration,
                &blob.intermediate_key_signature,
            )?;

        intermediate_key
            .verify_strict(
                &parameters.signed_message(&blob.salt),
                &Signature::from_bytes(&blob.payload),
            )
            .map_err(|_| SignatureError::SignatureFailedVerification)
    }
}
