//! Router assembly: entity routes, health check and fallbacks

use axum::http::{Method, Uri};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use super::entity_registry::EntityRegistry;
use super::state::AppState;
use crate::core::error::ApiError;

/// Build the full API router
///
/// - `GET /health` - Health check
/// - entity routes from every registered descriptor
/// - 405 for unsupported methods on known paths (attached per route)
/// - 404 for every other path
pub fn build_api_routes(registry: &EntityRegistry, state: AppState) -> Router {
    health_routes()
        .merge(registry.build_routes())
        .fallback(route_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "grubdash"
    }))
}

/// Fallback for a known path hit with an unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// Fallback for unknown paths
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        path: uri.path().to_string(),
    }
}
