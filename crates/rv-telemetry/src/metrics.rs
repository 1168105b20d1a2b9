//! Prometheus metrics for response verification.
//!
//! All metrics follow the naming convention: `rv_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{exponential_buckets, Encoder, Histogram, IntCounterVec, Opts, Registry, TextEncoder};
use rv_signing::{
    HttpRequest, HttpResponse, ResponseVerificationApi, VerificationMode, VerificationResult,
};

use crate::TelemetryError;

lazy_static! {
    /// Verification outcomes by result
    pub static ref VERIFICATION_RESULTS: IntCounterVec = IntCounterVec::new(
        Opts::new("rv_verification_results_total", "Response verification outcomes"),
        &["result"]  // not_requested / verified / failed
    ).expect("metric creation failed");

    /// Time spent verifying one response
    pub static ref VERIFICATION_DURATION: Histogram = Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "rv_verification_duration_seconds",
            "Time spent verifying a response"
        ).buckets(exponential_buckets(0.00001, 2.0, 14).expect("valid buckets"))
    ).expect("metric creation failed");

    /// Registry holding every metric above
    pub static ref REGISTRY: Registry = {
        let registry = Registry::new();
        registry
            .register(Box::new(VERIFICATION_RESULTS.clone()))
            .expect("metric registration failed");
        registry
            .register(Box::new(VERIFICATION_DURATION.clone()))
            .expect("metric registration failed");
        registry
    };
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Count of responses that ended with `result`.
pub fn result_count(result: VerificationResult) -> u64 {
    VERIFICATION_RESULTS.with_label_values(&[result.as_str()]).get()
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}

/// Decorates a verifier with outcome counters and a duration histogram.
pub struct MeteredVerifier<V> {
    inner: V,
}

impl<V: ResponseVerificationApi> MeteredVerifier<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: ResponseVerificationApi> ResponseVerificationApi for MeteredVerifier<V> {
    fn verification_result(
        &self,
        request: &HttpRequest,
        response: &HttpResponse,
    ) -> VerificationResult {
        let _timer = HistogramTimer::new(&VERIFICATION_DURATION);
        let result = self.inner.verification_result(request, response);
        VERIFICATION_RESULTS
            .with_label_values(&[result.as_str()])
            .inc();
        result
    }

    fn verification_mode(&self) -> VerificationMode {
        self.inner.verification_mode()
    }
}
