use metrics::{counter, histogram};
use std::time::Instant;

/// Increment the counter for one visitor record operation.
pub fn increment_visitor_operation(operation: &'static str) {
    counter!("visitor_operations_total", "operation" => operation).increment(1);
}

/// Increment the login attempt counter, labelled by outcome.
pub fn increment_login(success: bool) {
    let outcome = if success { "success" } else { "failure" };
    counter!("login_attempts_total", "outcome" => outcome).increment(1);
}

/// Track HTTP request latency using a histogram.
pub fn track_http_request(start: Instant, path: &str, method: &str, status: u16) {
    let elapsed = start.elapsed();
    histogram!(
        "http_request_duration_seconds",
        "path" => path.to_string(),
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .record(elapsed);
}
