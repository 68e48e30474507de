//! Per-request logging.
//!
//! Every request gets an `http` span with method, path and query, a
//! "request received" event on entry and tower-http's latency event on
//! response.

use axum::http::Request;
use tower_http::{
    LatencyUnit,
    trace::{DefaultOnResponse, HttpMakeClassifier, MakeSpan, OnRequest, TraceLayer},
};
use tracing::{Level, Span};

pub type RequestTraceLayer =
    TraceLayer<HttpMakeClassifier, RequestSpan, LogRequest, DefaultOnResponse>;

pub fn request_trace_layer() -> RequestTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_request(LogRequest)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "http",
            method = %request.method(),
            path = %request.uri().path(),
            query = request.uri().query().unwrap_or(""),
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogRequest;

impl<B> OnRequest<B> for LogRequest {
    fn on_request(&mut self, request: &Request<B>, _span: &Span) {
        tracing::info!(
            version = ?request.version(),
            user_agent = request
                .headers()
                .get(axum::http::header::USER_AGENT)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-"),
            "request received"
        );
    }
}
