use axum::{Json, extract::State, response::Response};
use axum::response::IntoResponse;
use tracing::{debug, info, instrument};

use crate::cache::LookupOptions;
use crate::embedding::EmbeddingProvider;
use crate::store::KvStore;

use super::error::GatewayError;
use super::normalize::repair_mojibake;
use super::payload::{SearchRequest, SearchResponse};
use super::state::GatewayState;

/// `POST /semantic_search`: looks up the closest cached answers for a query.
#[instrument(skip(state, request), fields(query_len = request.query.len()))]
pub async fn semantic_search_handler<E, S>(
    State(state): State<GatewayState<E, S>>,
    Json(request): Json<SearchRequest>,
) -> Result<Response, GatewayError>
where
    E: EmbeddingProvider + 'static,
    S: KvStore + 'static,
{
    let options = resolve_options(&request, state.default_options)?;

    let query = match repair_mojibake(&request.query) {
        Some(repaired) => {
            info!(
                original = %request.query,
                repaired = %repaired,
                "repaired mis-encoded query"
            );
            repaired
        }
        None => request.query,
    };

    let decision = match state.lookup_timeout {
        Some(timeout) => state.cache.lookup_with_timeout(&query, options, timeout).await?,
        None => state.cache.lookup(&query, options).await?,
    };

    debug!(hit = decision.is_hit(), "lookup decision");

    Ok(Json(SearchResponse::from(decision)).into_response())
}

/// Folds request-level overrides over server defaults, rejecting values the
/// core would refuse anyway so the caller gets a 400 instead of a 500.
fn resolve_options(
    request: &SearchRequest,
    defaults: LookupOptions,
) -> Result<LookupOptions, GatewayError> {
    let top_k = match request.top_k {
        Some(k) if k < 1 => {
            return Err(GatewayError::InvalidRequest(format!(
                "top_k must be at least 1, got {k}"
            )));
        }
        Some(k) => k as usize,
        None => defaults.top_k,
    };

    let threshold = match request.threshold {
        Some(t) if !t.is_finite() || !(-1.0..=1.0).contains(&t) => {
            return Err(GatewayError::InvalidRequest(format!(
                "threshold {t} is outside the valid range [-1.0, 1.0]"
            )));
        }
        Some(t) => t as f32,
        None => defaults.threshold,
    };

    Ok(LookupOptions::new(top_k, threshold))
}
