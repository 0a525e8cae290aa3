//! Prometheus metrics implementation.
//!
//! Concrete `Metrics` backed by the global `metrics` crate registry. The
//! sibling modules hold the counter helpers (`counters.rs`) and the global
//! recorder handle used for rendering (`recorder.rs`).

use crate::domain::Metrics;
use std::time::Instant;

/// Prometheus-based metrics implementation.
///
/// Stateless: counters and histograms are registered on first use in the
/// global registry, and the handle in `recorder.rs` renders them.
pub struct PrometheusMetrics {}

impl PrometheusMetrics {
    pub fn new() -> Self {
        PrometheusMetrics {}
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> String {
        super::render_metrics()
    }

    fn record_visitor_created(&self) {
        tracing::debug!("Recording visitor created event");
        super::increment_visitor_operation("create");
    }

    fn record_visitor_updated(&self) {
        tracing::debug!("Recording visitor updated event");
        super::increment_visitor_operation("update");
    }

    fn record_visitor_deleted(&self) {
        tracing::debug!("Recording visitor deleted event");
        super::increment_visitor_operation("delete");
    }

    fn record_login(&self, success: bool) {
        tracing::debug!(success, "Recording login attempt");
        super::increment_login(success);
    }

    fn record_http_request(&self, start: Instant, path: &str, method: &str, status: u16) {
        super::track_http_request(start, path, method, status);
    }
}
