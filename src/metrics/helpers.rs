//! Metrics helper structs for convenient metric recording

use prometheus::{Encoder, TextEncoder};

use super::{ERRORS_ARG_MISMATCH_TOTAL, ERRORS_CREATED_TOTAL, REGISTRY};

/// Encode this crate's metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording error factory metrics
pub struct ErrorMetrics;

impl ErrorMetrics {
    /// Record a structured error created for `reason`
    pub fn record_created(reason: &str) {
        ERRORS_CREATED_TOTAL.with_label_values(&[reason]).inc();
    }

    /// Record a render with fewer arguments than placeholders
    pub fn record_missing(reason: &str) {
        ERRORS_ARG_MISMATCH_TOTAL
            .with_label_values(&[reason, "missing"])
            .inc();
    }

    /// Record a render with more arguments than placeholders
    pub fn record_extra(reason: &str) {
        ERRORS_ARG_MISMATCH_TOTAL
            .with_label_values(&[reason, "extra"])
            .inc();
    }
}
