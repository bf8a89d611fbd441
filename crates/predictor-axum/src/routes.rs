//! Route definitions and router construction.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::handlers;
use crate::openapi::docs_routes;
use crate::state::AppState;

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// People API routes, without state applied.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::people::list))
        .route(
            "/people",
            get(handlers::people::list).post(handlers::people::create),
        )
        .route(
            "/people/{id}",
            get(handlers::people::get)
                .put(handlers::people::update)
                .patch(handlers::people::update)
                .delete(handlers::people::remove),
        )
}

/// Create the main Axum router.
///
/// Requests taking longer than `request_timeout` are answered with 408 and
/// their handler future is dropped, cancelling any in-flight query. API
/// documentation is served under `/swagger`.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, request_timeout: Duration) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .merge(docs_routes())
        .merge(api_routes().with_state(state))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
