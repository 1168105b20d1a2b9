//! # Inbound Ports (Driving Ports / API)
//!
//! The interface the HTTP layer uses to verify a completed exchange.

use crate::config::VerificationMode;
use crate::domain::entities::{HttpRequest, HttpResponse, VerificationResult, VerifiedResponse};
use crate::domain::errors::ResponseVerificationError;

/// Per-exchange response verification.
///
/// Implementations must be thread-safe (`Send + Sync`): a single verifier
/// serves every in-flight response.
pub trait ResponseVerificationApi: Send + Sync {
    /// Compute the tri-state result for one exchange.
    fn verification_result(&self, request: &HttpRequest, response: &HttpResponse)
        -> VerificationResult;

    /// The configured verification mode.
    fn verification_mode(&self) -> VerificationMode;

    /// Attach the verification result to the response.
    fn verify(&self, request: &HttpRequest, response: HttpResponse) -> VerifiedResponse {
        let verification_result = self.verification_result(request, &response);
        VerifiedResponse::new(response, verification_result)
    }

    /// Like [`verify`](Self::verify), but a `Failed` result is an error when
    /// the mode is [`VerificationMode::Enforced`].
    fn verify_enforced(
        &self,
        request: &HttpRequest,
        response: HttpResponse,
    ) -> Result<VerifiedResponse, ResponseVerificationError> {
        let verified = self.verify(request, response);

        if verified.verification_result() == VerificationResult::Failed
            && self.verification_mode() == VerificationMode::Enforced
        {
            return Err(ResponseVerificationError::SignatureVerificationFailed {
                request: request.to_string(),
            });
        }

        Ok(verified)
    }
}
