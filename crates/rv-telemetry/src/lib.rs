//! # Response Verification Telemetry
//!
//! Logging and metrics around the verification core.
//!
//! ## Components
//!
//! - **Logging**: `tracing-subscriber` with env filter, pretty or JSON output
//! - **Metrics**: Prometheus counters and histograms for verification outcomes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rv_telemetry::{init_telemetry, MeteredVerifier, TelemetryConfig};
//!
//! let _guard = init_telemetry(TelemetryConfig::from_env())?;
//! let verifier = MeteredVerifier::new(ResponseVerifier::new(VerificationConfig::from_env()?));
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RV_SERVICE_NAME` | `response-verification` | Service name in logs |
//! | `RV_LOG_LEVEL` | `info` | Log level filter |
//! | `RV_JSON_LOGS` | `false` | JSON formatted logs |

mod config;
mod metrics;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use metrics::{
    encode_metrics, result_count, HistogramTimer, MeteredVerifier, VERIFICATION_DURATION,
    VERIFICATION_RESULTS,
};
pub use tracing_setup::TracingGuard;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Failed to encode Prometheus metrics: {0}")]
    MetricsInit(String),
}

/// Install logging. Hold the returned guard for the lifetime of the process.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let tracing_guard = tracing_setup::init_tracing(&config)?;

    Ok(TelemetryGuard {
        _tracing: tracing_guard,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    _tracing: TracingGuard,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::debug!("Shutting down telemetry");
    }
}
