//! Prometheus metrics for the site.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site router counts every response by status code through [`track`].
//! A separate listener (`METRICS_PORT`) serves the registry at `/metrics` in
//! the Prometheus text format, together with the process collector
//! (CPU, memory, open fds) on Linux.

use axum::Router;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    responses: IntCounterVec,
}

impl Metrics {
    /// Build a fresh registry with the response counter and, on Linux, the
    /// process collector.
    ///
    /// # Errors
    ///
    /// Returns a [`prometheus::Error`] if a collector fails to register.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let responses = IntCounterVec::new(
            Opts::new("daylight_http_responses_total", "Site responses by HTTP status code."),
            &["status"],
        )?;
        registry.register(Box::new(responses.clone()))?;
        #[cfg(target_os = "linux")]
        registry.register(Box::new(prometheus::process_collector::ProcessCollector::for_self()))?;
        Ok(Self { registry, responses })
    }

    pub fn observe(&self, status: StatusCode) {
        self.responses.with_label_values(&[status.as_str()]).inc();
    }

    /// Encode everything in the registry in the Prometheus text format.
    ///
    /// # Errors
    ///
    /// Returns a [`prometheus::Error`] if encoding fails.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}

/// Middleware counting each site response.
pub async fn track(State(metrics): State<Metrics>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    metrics.observe(response.status());
    response
}

/// Router for the metrics listener.
pub fn app(metrics: Metrics) -> Router {
    Router::new().route("/metrics", get(scrape)).with_state(metrics)
}

async fn scrape(State(metrics): State<Metrics>) -> Response {
    match metrics.render() {
        Ok(body) => ([(header::CONTENT_TYPE, TextEncoder::new().format_type().to_owned())], body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "metrics encoding failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
