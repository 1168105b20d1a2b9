//! # Golden Vectors
//!
//! Signatures captured from the production backend, checked against the
//! compiled-in root key. The intermediate keys in these captures have since
//! expired, so each check runs with the clock frozen at the capture's request
//! date.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use tracing::Level;

    use rv_signing::{
        FixedClock, IntermediateKeyExpiration, KeyStore, RecordingLogger, SignatureBlob,
        SignatureError, SignatureParameters, SignatureVerifier,
    };

    use crate::fixtures::*;

    fn verifier_at(clock: FixedClock) -> (SignatureVerifier, Arc<RecordingLogger>) {
        let logger = Arc::new(RecordingLogger::new());
        (SignatureVerifier::new(Arc::new(clock), logger.clone()), logger)
    }

    fn login_parameters() -> SignatureParameters {
        SignatureParameters::new(login::REQUEST_DATE)
            .with_message(login::BODY)
            .with_nonce(CAPTURED_NONCE)
            .with_etag(login::ETAG)
    }

    #[test]
    fn test_known_signature_with_nonce_and_etag() {
        let (verifier, logger) = verifier_at(clock_at(login::REQUEST_DATE));

        assert!(verifier.verify(login::SIGNATURE, &login_parameters(), KeyStore::load_public_key()));
        assert!(logger.is_empty());
    }

    #[test]
    fn test_known_signature_of_empty_response_with_nonce() {
        let (verifier, _) = verifier_at(clock_at(health::REQUEST_DATE));
        let parameters = SignatureParameters::new(health::REQUEST_DATE)
            .with_message(health::BODY)
            .with_nonce(CAPTURED_NONCE);

        assert!(verifier.verify(health::SIGNATURE, &parameters, KeyStore::load_public_key()));
    }

    #[test]
    fn test_known_signature_of_not_modified_response() {
        let (verifier, _) = verifier_at(clock_at(not_modified::REQUEST_DATE));
        let parameters = SignatureParameters::new(not_modified::REQUEST_DATE)
            .with_nonce(CAPTURED_NONCE)
            .with_etag(not_modified::ETAG);

        assert!(verifier.verify(not_modified::SIGNATURE, &parameters, KeyStore::load_public_key()));
    }

    #[test]
    fn test_known_signature_with_zero_expiration_is_rejected() {
        let (verifier, logger) = verifier_at(clock_at(offerings::REQUEST_DATE));
        let parameters =
            SignatureParameters::new(offerings::REQUEST_DATE).with_message(offerings::BODY);

        assert!(!verifier.verify(offerings::SIGNATURE, &parameters, KeyStore::load_public_key()));
        assert!(logger.contains(Level::WARN, "Intermediate key invalid: 0"));
    }

    #[test]
    fn test_captured_blobs_share_one_intermediate_key() {
        let login = SignatureBlob::from_base64(login::SIGNATURE).unwrap();
        let health = SignatureBlob::from_base64(health::SIGNATURE).unwrap();

        assert_eq!(login.intermediate_public_key, health.intermediate_public_key);
        assert_eq!(login.intermediate_key_expiration.days(), 19565);
        assert_eq!(
            login.intermediate_key_expiration.to_date(),
            Some(Utc.with_ymd_and_hms(2023, 7, 27, 0, 0, 0).unwrap())
        );
        assert_ne!(login.salt, health.salt);
    }

    #[test]
    fn test_offerings_blob_carries_sentinel_expiration() {
        let blob = SignatureBlob::from_base64(offerings::SIGNATURE).unwrap();
        assert_eq!(blob.intermediate_key_expiration, IntermediateKeyExpiration::INVALID);
    }

    #[test]
    fn test_known_signature_valid_until_expiration_day() {
        let last_second = Utc.with_ymd_and_hms(2023, 7, 26, 23, 59, 59).unwrap();
        let expiry = Utc.with_ymd_and_hms(2023, 7, 27, 0, 0, 0).unwrap();

        let (verifier, _) = verifier_at(FixedClock(last_second));
        assert!(verifier.verify(login::SIGNATURE, &login_parameters(), KeyStore::load_public_key()));

        let (verifier, logger) = verifier_at(FixedClock(expiry));
        assert_eq!(
            verifier.check(login::SIGNATURE, &login_parameters(), KeyStore::load_public_key()),
            Err(SignatureError::IntermediateKeyExpired(expiry))
        );
        assert!(!verifier.verify(login::SIGNATURE, &login_parameters(), KeyStore::load_public_key()));
        assert!(logger.contains(Level::WARN, "Intermediate key expired"));
    }

    #[test]
    fn test_known_signature_rejects_altered_inputs() {
        let (verifier, _) = verifier_at(clock_at(login::REQUEST_DATE));
        let root = KeyStore::load_public_key();

        let other_etag = login_parameters().with_etag("97d4f0d2353d784a");
        let without_newline = login_parameters().with_message(login::BODY.trim_end());
        let without_nonce = SignatureParameters {
            nonce: None,
            ..login_parameters()
        };
        let later = SignatureParameters {
            request_date: login::REQUEST_DATE + 1,
            ..login_parameters()
        };

        for parameters in [other_etag, without_newline, without_nonce, later] {
            assert_eq!(
                verifier.check(login::SIGNATURE, &parameters, root),
                Err(SignatureError::SignatureFailedVerification)
            );
        }
    }

    #[test]
    fn test_known_signature_rejected_under_other_root() {
        let (verifier, _) = verifier_at(clock_at(login::REQUEST_DATE));
        let other_root = generate_key().verifying_key();

        assert_eq!(
            verifier.check(login::SIGNATURE, &login_parameters(), &other_root),
            Err(SignatureError::IntermediateKeyFailedVerification)
        );
    }
}
