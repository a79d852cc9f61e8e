//! Prometheus metrics for error construction.
//!
//! - Errors created, by reason
//! - Argument-count mismatches (missing or extra arguments), by reason
//!
//! Counters live in a crate-owned [`Registry`] rather than the process-wide
//! default one, so names registered by the host application cannot clash.
//! Use [`registry`] to expose them alongside the host's own metrics.

mod helpers;

pub use helpers::{encode_metrics, ErrorMetrics};

use lazy_static::lazy_static;
use prometheus::{IntCounterVec, Opts, Registry};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "ara";

lazy_static! {
    static ref REGISTRY: Registry = Registry::new();

    /// Structured errors created by factories
    pub static ref ERRORS_CREATED_TOTAL: IntCounterVec = counter_vec(
        "http_errors_created_total",
        "Total structured errors created",
        &["reason"]
    );

    /// Errors rendered with the wrong number of arguments
    pub static ref ERRORS_ARG_MISMATCH_TOTAL: IntCounterVec = counter_vec(
        "http_errors_arg_mismatch_total",
        "Total errors rendered with missing or extra arguments",
        &["reason", "kind"]
    );
}

/// Registry holding this crate's counters
pub fn registry() -> &'static Registry {
    &REGISTRY
}

fn counter_vec(name: &str, help: &str, labels: &[&str]) -> IntCounterVec {
    let opts = Opts::new(format!("{}_{}", METRIC_PREFIX, name), help);
    // Name, help and labels are constants; construction only fails on invalid ones
    let counter = IntCounterVec::new(opts, labels).unwrap();

    if let Err(e) = REGISTRY.register(Box::new(counter.clone())) {
        tracing::warn!(metric = %name, error = %e, "Failed to register metric");
    }

    counter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_metrics() {
        // Initialize some metrics first (lazy_static requires first access)
        ERRORS_CREATED_TOTAL.with_label_values(&["MetricsTest"]).inc();

        let result = encode_metrics();
        assert!(result.is_ok());
        let output = result.unwrap();
        assert!(output.contains("ara_http_errors_created_total"));
    }

    #[test]
    fn test_mismatch_metrics() {
        ErrorMetrics::record_missing("MetricsTest");
        ErrorMetrics::record_extra("MetricsTest");
        let missing = ERRORS_ARG_MISMATCH_TOTAL
            .with_label_values(&["MetricsTest", "missing"])
            .get();
        assert!(missing >= 1);
    }

    #[test]
    fn test_counters_stay_out_of_default_registry() {
        ErrorMetrics::record_created("RegistryTest");

        let in_default = prometheus::gather()
            .iter()
            .any(|family| family.get_name() == "ara_http_errors_created_total");
        assert!(!in_default);
        assert!(registry()
            .gather()
            .iter()
            .any(|family| family.get_name() == "ara_http_errors_created_total"));
    }

    #[test]
    fn test_duplicate_registration_does_not_panic() {
        let first = counter_vec("dup_test_total", "Duplicate test", &["reason"]);
        let second = counter_vec("dup_test_total", "Duplicate test", &["reason"]);
        first.with_label_values(&["a"]).inc();
        second.with_label_values(&["a"]).inc();
    }
}
