//! Shared fixtures for integration tests and benchmarks.

use std::sync::Arc;

use ed25519_dalek::SigningKey;

use rv_signing::{
    FixedClock, RecordingLogger, ResponseVerifier, VerificationConfig, VerificationMode,
};

pub use rv_signing::test_helpers::{generate_key, signer_expiring_in, test_clock};

/// Nonce sent with every captured request, base64 `MTIzNDU2Nzg5MGFi`.
pub const CAPTURED_NONCE: &[u8] = b"1234567890ab";

/// `GET /v1/subscribers/login` with nonce and etag.
pub mod login {
    pub const REQUEST_DATE: u64 = 1688066622299;
    pub const ETAG: &str = "9d74782403a43274";
    pub const BODY: &str = concat!(
        r#"{"request_date":"2023-06-29T19:23:42Z","request_date_ms":1688066622298,"#,
        r#""subscriber":{"entitlements":{},"first_seen":"2023-06-29T19:23:42Z","#,
        r#""last_seen":"2023-06-29T19:23:42Z","management_url":null,"non_subscriptions":{},"#,
        r#""original_app_user_id":"login","original_application_version":null,"#,
        r#""original_purchase_date":null,"other_purchases":{},"subscriptions":{}}}"#,
        "\n"
    );
    pub const SIGNATURE: &str = concat!(
        "XX8Mh8DTcqPC5A48nncRU3hDkL/v3baxxqLIWnWJzg1tTAAA7ok0iXupT2bjju/BSHVmgxc0XiwTZXBmsGuWEXa9",
        "lsyoFi9HMF4aAIOs4Y+lYE2i4USJCP7ev07QZk7D2b6ZBSkFSDzefa+cDeSEtlG+AB3lQ9F7qXf7kg2GqVQR3D7a",
        "yNFwey4c2p/WMZYfx5tJaKVzOPWQPtM3jmfByfOZd6rLkE+SYycExStyDpUACWcA"
    );
}

/// `GET /v1/health` with nonce, body `""`.
pub mod health {
    pub const REQUEST_DATE: u64 = 1688066733210;
    pub const BODY: &str = "\"\"\n";
    pub const SIGNATURE: &str = concat!(
        "XX8Mh8DTcqPC5A48nncRU3hDkL/v3baxxqLIWnWJzg1tTAAA7ok0iXupT2bjju/BSHVmgxc0XiwTZXBmsGuWEXa9",
        "lsyoFi9HMF4aAIOs4Y+lYE2i4USJCP7ev07QZk7D2b6ZBVIcfv+kOk0mmfI22o3ZId31m88mVG2BqPPQpNfyQYjm",
        "wjymg00WqlSHY2Yqgq20fK0wEdG8RDJEqsMOPOo93kO+wGvlkOvlEqMF39vXtOMI"
    );
}

/// `GET /v1/subscribers/login` answered with 304.
pub mod not_modified {
    pub const REQUEST_DATE: u64 = 1688066798532;
    pub const ETAG: &str = "9d74782403a43274";
    pub const SIGNATURE: &str = concat!(
        "XX8Mh8DTcqPC5A48nncRU3hDkL/v3baxxqLIWnWJzg1tTAAA7ok0iXupT2bjju/BSHVmgxc0XiwTZXBmsGuWEXa9",
        "lsyoFi9HMF4aAIOs4Y+lYE2i4USJCP7ev07QZk7D2b6ZBT0H1sSsBkbLM0LwwTSwTceDJXijNlz0tStn0Qi0dPRw",
        "FL+LN7vcsNqhJFq0+zqm2St/cKHJKxK+1HB+1S0lr0isIHY2G7PVmR2s3Zynx90M"
    );
}

/// `GET /v1/subscribers/test/offerings` without nonce or etag, signed with a
/// zero-expiration intermediate key.
pub mod offerings {
    pub const REQUEST_DATE: u64 = 1687455094309;
    pub const BODY: &str = concat!(
        r#"{"current_offering_id":"default","offerings":[{"description":"Default","#,
        r#""identifier":"default","packages":[]}]}"#,
        "\n"
    );
    pub const SIGNATURE: &str = concat!(
        "drCCA+6YAKOAjT7b2RosYNTrRexVWnu+dR5fw/JuKeAAAAAA0FnsHKjqgSrOj+YkdU2TZfLfpMfx8w9miUkqxyWM",
        "I0h2z0weWLNlF1MPG7ZrL+vOEQi+LvYkcffxprzcn1uSAVfQSkHeWl4NJ4IDusH1iegd46IlIRN+o2Ej9KsKv+NW",
        "QUgQZ5gMt5GJ25GydlA772xmGGFGgxCnfa+/mFDQ4WpODkbtkiFheRxEsbUs8zQJ"
    );
}

/// Clock frozen at a request date in epoch milliseconds.
pub fn clock_at(millis: u64) -> FixedClock {
    FixedClock::at_millis(millis).expect("request date in range")
}

/// A verifier trusting `root`, with a frozen clock and a recording logger.
pub fn recording_verifier(
    root: &SigningKey,
    mode: VerificationMode,
) -> (ResponseVerifier, Arc<RecordingLogger>) {
    let logger = Arc::new(RecordingLogger::new());
    let verifier = ResponseVerifier::new(VerificationConfig::with_mode(mode))
        .with_public_key(Some(root.verifying_key()))
        .with_clock(Arc::new(test_clock()))
        .with_logger(logger.clone());
    (verifier, logger)
}
