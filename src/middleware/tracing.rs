// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Opens one span per HTTP request carrying a request ID, method, and path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{body::Body, http::Request};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::TraceLayer,
};
use tracing::{info_span, Span};
use uuid::Uuid;

/// Header a caller may set to correlate its own logs with ours
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Span factory used by [`trace_layer`]
fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| format!("req_{}", Uuid::new_v4().simple()), ToOwned::to_owned);

    info_span!(
        "http_request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    )
}

/// HTTP trace layer; 5xx responses are reported as failures
#[must_use]
pub fn trace_layer(
) -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, fn(&Request<Body>) -> Span> {
    TraceLayer::new_for_http().make_span_with(make_request_span as fn(&Request<Body>) -> Span)
}
