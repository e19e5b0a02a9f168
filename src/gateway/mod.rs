//! HTTP gateway (axum) for semantic search lookups.
//!
//! A thin marshalling shim over [`crate::cache::SemanticCache`]: it parses the
//! inbound request, normalizes the query encoding, invokes the core, and
//! serializes the decision. Protocol framing, CORS, and trace logging live
//! here, never in the core.

pub mod error;
pub mod handler;
pub mod normalize;
pub mod payload;
pub mod state;

#[cfg(test)]
mod handler_tests;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::embedding::EmbeddingProvider;
use crate::store::KvStore;

pub use handler::semantic_search_handler;
pub use state::GatewayState;

/// Builds the service router over a prepared [`GatewayState`].
pub fn create_router_with_state<E, S>(state: GatewayState<E, S>) -> Router
where
    E: EmbeddingProvider + 'static,
    S: KvStore + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/semantic_search", post(semantic_search_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
}

pub async fn health_handler() -> Response {
    (StatusCode::OK, Json(HealthResponse { status: "ok" })).into_response()
}

/// Reports that the router is serving. Dependency liveness is verified once
/// at startup (`RedisStore::health_check`), not re-probed per request.
pub async fn ready_handler() -> Response {
    (StatusCode::OK, Json(ReadyResponse { status: "ready" })).into_response()
}
