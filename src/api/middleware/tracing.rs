//! HTTP request/response tracing middleware.

use axum::http::Request;
use std::sync::atomic::{AtomicU64, Ordering};
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// Builds one `request` span per inbound request, tagged with a process-unique id.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed);

        tracing::info_span!(
            "request",
            request_id,
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
        )
    }
}

/// Creates a tracing middleware for HTTP requests.
///
/// Responses are logged at `INFO` with status and latency in milliseconds,
/// 5xx responses additionally at `ERROR`.
///
/// # Example Logs
///
/// ```text
/// INFO request{request_id=7 method=POST uri=/ version=HTTP/1.1}: finished processing request latency=3 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_increase() {
        let request = Request::builder().uri("/ex").body(()).unwrap();
        let mut make_span = RequestSpan;

        let before = NEXT_REQUEST_ID.load(Ordering::Relaxed);
        let _span = make_span.make_span(&request);
        let after = NEXT_REQUEST_ID.load(Ordering::Relaxed);

        assert!(after > before);
    }
}
