//! # Response Verification Service
//!
//! Application service that implements [`ResponseVerificationApi`]: decides per
//! HTTP exchange whether verification applies and computes the final result.
//!
//! ## Decision Table
//!
//! | Public key | Signature header | Request nonce | Result |
//! |------------|------------------|---------------|--------|
//! | none (mode `disabled`) | any | any | `NotRequested` |
//! | present | absent | absent | `NotRequested` |
//! | present | absent | present | `Failed` (logged) |
//! | present | present | any | `Verified` / `Failed` per [`SignatureVerifier`] |

use std::sync::Arc;

use http::Method;
use tracing::Level;

use crate::adapters::clock::SystemClock;
use crate::adapters::logging::TracingLogger;
use crate::config::{VerificationConfig, VerificationMode};
use crate::domain::entities::{HttpRequest, HttpResponse, VerificationResult};
use crate::domain::keys::{KeyStore, PublicKey};
use crate::domain::parameters::SignatureParameters;
use crate::ports::inbound::ResponseVerificationApi;
use crate::ports::outbound::{Clock, VerificationLogger};
use crate::verifier::SignatureVerifier;

/// Response Verification Service.
///
/// One instance serves every in-flight response; it holds no mutable state.
pub struct ResponseVerifier {
    config: VerificationConfig,
    public_key: Option<PublicKey>,
    clock: Arc<dyn Clock>,
    logger: Arc<dyn VerificationLogger>,
    signing: SignatureVerifier,
}

impl ResponseVerifier {
    /// Create a verifier using the compiled-in root key, unless the mode is
    /// `disabled`.
    pub fn new(config: VerificationConfig) -> Self {
        let public_key = config
            .mode
            .is_enabled()
            .then(|| *KeyStore::load_public_key());
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let logger: Arc<dyn VerificationLogger> = Arc::new(TracingLogger);

        Self {
            config,
            public_key,
            signing: SignatureVerifier::new(clock.clone(), logger.clone()),
            clock,
            logger,
        }
    }

    /// Replace the root key; `None` turns verification off.
    ///
    /// Ignored in `disabled` mode, which never verifies.
    pub fn with_public_key(mut self, public_key: Option<PublicKey>) -> Self {
        self.public_key = public_key.filter(|_| self.config.mode.is_enabled());
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self.rebuild_signing();
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn VerificationLogger>) -> Self {
        self.logger = logger;
        self.rebuild_signing();
        self
    }

    pub fn config(&self) -> &VerificationConfig {
        &self.config
    }

    pub fn public_key(&self) -> Option<&PublicKey> {
        self.public_key.as_ref()
    }

    /// Build a request, attaching a fresh nonce when verification is on.
    pub fn create_request(&self, method: Method, path: impl Into<String>) -> HttpRequest {
        if self.public_key.is_some() {
            HttpRequest::with_nonce(method, path, self.config.nonce_size)
        } else {
            HttpRequest::new(method, path)
        }
    }

    /// Parameters the server signed for this exchange, or `None` when the
    /// request date header is missing or malformed.
    pub fn signature_parameters(
        &self,
        request: &HttpRequest,
        response: &HttpResponse,
    ) -> Option<SignatureParameters> {
        let request_date = response
            .header(&self.config.headers.request_date)?
            .trim()
            .parse::<u64>()
            .ok()?;
        let message = if response.is_not_modified() {
            None
        } else {
            response.body.clone()
        };

        Some(SignatureParameters {
            message,
            nonce: request.nonce.clone(),
            etag: response.header(&self.config.headers.etag).map(str::to_string),
            request_date,
        })
    }

    fn rebuild_signing(&mut self) {
        self.signing = SignatureVerifier::new(self.clock.clone(), self.logger.clone());
    }
}

impl ResponseVerificationApi for ResponseVerifier {
    fn verification_result(
        &self,
        request: &HttpRequest,
        response: &HttpResponse,
    ) -> VerificationResult {
        let Some(public_key) = self.public_key.as_ref() else {
            return VerificationResult::NotRequested;
        };

        let Some(signature) = response.header(&self.config.headers.signature) else {
            if request.nonce.is_some() {
                self.logger.log(
                    Level::WARN,
                    &format!("Signature was requested but not provided: {request}"),
                );
                return VerificationResult::Failed;
            }
            return VerificationResult::NotRequested;
        };

        let Some(parameters) = self.signature_parameters(request, response) else {
            self.logger.log(
                Level::WARN,
                &format!("Request date missing or invalid in response headers: {request}"),
            );
            return VerificationResult::Failed;
        };

        if self.signing.verify(signature, &parameters, public_key) {
            VerificationResult::Verified
        } else {
            VerificationResult::Failed
        }
    }

    fn verification_mode(&self) -> VerificationMode {
        self.config.mode
    }
}
