//! Prometheus metrics for quote computation.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// Quote computation latency metric name.
pub const METRIC_QUOTE_LATENCY: &str = "quote_latency_us";
/// Quotes computed counter metric name.
pub const METRIC_QUOTES_COMPUTED: &str = "quotes_computed_total";
/// Quotes rejected counter metric name.
pub const METRIC_QUOTES_REJECTED: &str = "quotes_rejected_total";

/// Install a process-wide Prometheus recorder.
///
/// Without a recorder every metric call below is a no-op.
pub fn install_prometheus() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Initialize all metric descriptions.
/// Call this once at startup, after any recorder is installed.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_QUOTE_LATENCY,
        "Quote computation latency in microseconds"
    );
    describe_counter!(METRIC_QUOTES_COMPUTED, "Total number of quotes computed");
    describe_counter!(
        METRIC_QUOTES_REJECTED,
        "Total number of quotes rejected with a domain error"
    );

    debug!("Metrics initialized");
}

/// Increment quotes computed counter.
pub fn inc_quotes_computed() {
    counter!(METRIC_QUOTES_COMPUTED).increment(1);
}

/// Increment quotes rejected counter.
pub fn inc_quotes_rejected() {
    counter!(METRIC_QUOTES_REJECTED).increment(1);
}

/// RAII guard for timing operations.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    metric_name: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given metric.
    pub fn new(metric_name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            metric_name,
        }
    }

    /// Get elapsed time in microseconds (without recording).
    pub fn elapsed_us(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1_000_000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        histogram!(self.metric_name).record(self.elapsed_us());
    }
}

/// Create a latency timer for quote computation.
pub fn timer_quote() -> LatencyTimer {
    LatencyTimer::new(METRIC_QUOTE_LATENCY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn latency_timer_measures_time() {
        let timer = LatencyTimer::new("test_metric");
        sleep(Duration::from_millis(2));
        assert!(timer.elapsed_us() >= 1_000.0);
    }
}
