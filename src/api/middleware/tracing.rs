//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

/// Header set by API Gateway / the Lambda runtime for X-Ray correlation.
const AMZN_TRACE_ID: &str = "x-amzn-trace-id";

type MakeSpan = fn(&Request<Body>) -> Span;

/// Creates a tracing middleware for HTTP requests.
///
/// **On Request:** opens an `INFO` span with method, URI and the
/// `x-amzn-trace-id` header (`-` when absent).
///
/// **On Response:** logs status code and latency in milliseconds.
///
/// ```text
/// INFO request{method=POST uri=/contact trace_id=Root=1-65...}: finished processing request latency=84 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeSpan> {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn make_span(request: &Request<Body>) -> Span {
    let trace_id = request
        .headers()
        .get(AMZN_TRACE_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        trace_id = %trace_id,
    )
}
