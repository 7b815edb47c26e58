//! API module
//!
//! HTTP API endpoints and middleware.

pub mod middleware;
pub mod routes;

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::store::SquirrelStore;

pub use routes::create_router;

/// Build the application router
///
/// Layers run outermost first: trace -> context -> logging -> 405 rendering -> handler.
pub fn build_router(store: SquirrelStore) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(create_router())
        .fallback(route_not_found)
        .layer(axum::middleware::map_response(render_method_not_allowed))
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(axum::middleware::from_fn(middleware::context_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Health check endpoint
async fn health_check(State(store): State<SquirrelStore>) -> AppResult<&'static str> {
    db::verify_connection(store.pool()).await?;
    Ok("OK")
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

/// Give the method router's bodiless 405 the JSON error shape, keeping `Allow`
async fn render_method_not_allowed(method: Method, response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED
        || response.headers().contains_key(header::CONTENT_TYPE)
    {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut rendered = AppError::MethodNotAllowed(method.to_string()).into_response();
    if let Some(allow) = allow {
        rendered.headers_mut().insert(header::ALLOW, allow);
    }

    rendered
}
