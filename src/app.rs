use std::time::Duration;

use axum::{
    Json, Router,
    body::Body,
    http::{HeaderName, Request, Response, StatusCode, Uri},
    routing::get,
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    classify::ServerErrorsFailureClass,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;

use crate::{
    response::ErrorResponse,
    routes::{create_api_router, doc::scalar_docs, health},
    state::AppState,
};

const REQUEST_ID: &str = "x-request-id";
const MAX_BODY_BYTES: usize = 1024 * 1024;
const MAX_IN_FLIGHT: usize = 100;

fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
}

/// Full application: `/health`, the API under `/api`, docs at `/docs`.
pub fn build_app(state: AppState) -> Router {
    let header = HeaderName::from_static(REQUEST_ID);

    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http",
                method = %request.method(),
                path = %request.uri().path(),
                request_id = %request_id(request),
            )
        })
        .on_request(|_: &Request<Body>, _: &Span| tracing::debug!("started"))
        .on_response(|response: &Response<Body>, latency: Duration, _: &Span| {
            tracing::info!(status = response.status().as_u16(), ms = latency.as_millis(), "finished");
        })
        .on_failure(|class: ServerErrorsFailureClass, latency: Duration, _: &Span| {
            tracing::warn!(%class, ms = latency.as_millis(), "failed");
        });

    // Layers run bottom-up: the id is assigned before the trace span reads it.
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(scalar_docs())
        .fallback(not_found)
        .layer(trace)
        .layer(PropagateRequestIdLayer::new(header.clone()))
        .layer(SetRequestIdLayer::new(header, MakeRequestUuid))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(ConcurrencyLimitLayer::new(MAX_IN_FLIGHT))
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    let body = ErrorResponse::new("Not Found", format!("No route for {}", uri.path()));
    (StatusCode::NOT_FOUND, Json(body))
}
