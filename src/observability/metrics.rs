//! Metrics collection and exposition.
//!
//! # Metrics
//! - `greeting_requests_total` (counter): responses by status
//! - `greeting_request_duration_seconds` (histogram): latency by status
//!
//! Every response leaving the router is counted, including fallback 404s and
//! 408s produced by the timeout layer.

use axum::{extract::Request, middleware::Next, response::Response};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter listening on `addr`.
///
/// Must be called from inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one finished request.
pub fn record_request(status: u16, start: Instant) {
    let status = status.to_string();
    metrics::counter!("greeting_requests_total", "status" => status.clone()).increment(1);
    metrics::histogram!("greeting_request_duration_seconds", "status" => status)
        .record(start.elapsed().as_secs_f64());
}

/// Middleware recording every response that passes through it.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let response = next.run(request).await;
    record_request(response.status().as_u16(), start_time);
    response
}
