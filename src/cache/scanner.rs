//! Candidate scanning: enumerate, fetch, decode, score.

use futures_util::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::document;
use crate::similarity;
use crate::store::{KvStore, StoreError};

use super::types::ScoredCandidate;

/// Scans every entry under `prefix` and scores it against `query_vector`.
///
/// Invalid entries are skipped, never fatal: values deleted between
/// enumeration and fetch, documents that fail to decode, and embeddings whose
/// dimension differs from the query's. Store failures, by contrast, propagate.
///
/// Fetches run with at most `fetch_concurrency` in flight. Candidate order
/// follows fetch completion and is not meaningful; ranking imposes the output
/// order.
pub(crate) async fn scan_candidates<S: KvStore>(
    store: &S,
    prefix: &str,
    query_vector: &[f32],
    fetch_concurrency: usize,
) -> Result<Vec<ScoredCandidate>, StoreError> {
    let keys = store.keys_with_prefix(prefix).await?;

    debug!(prefix = prefix, keys = keys.len(), "scanning cache namespace");

    if keys.is_empty() {
        return Ok(Vec::new());
    }

    let fetched: Vec<(String, Result<Option<Vec<u8>>, StoreError>)> = stream::iter(keys)
        .map(|key| async move {
            let value = store.get(&key).await;
            (key, value)
        })
        .buffer_unordered(fetch_concurrency.max(1))
        .collect()
        .await;

    let mut candidates = Vec::new();
    let mut skipped_missing = 0usize;
    let mut skipped_decode = 0usize;
    let mut skipped_dimension = 0usize;

    for (key, value) in fetched {
        let raw = match value? {
            Some(raw) => raw,
            None => {
                // Deleted between SCAN and GET.
                skipped_missing += 1;
                continue;
            }
        };

        let doc = match document::decode(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                debug!(key = %key, error = %e, "skipping undecodable cache entry");
                skipped_decode += 1;
                continue;
            }
        };

        let score = match similarity::cosine_similarity(query_vector, &doc.embedding) {
            Ok(score) => score,
            Err(e) => {
                warn!(key = %key, error = %e, "skipping cache entry with mismatched embedding");
                skipped_dimension += 1;
                continue;
            }
        };

        candidates.push(ScoredCandidate {
            key,
            text: doc.text,
            response: doc.response,
            score,
        });
    }

    if skipped_missing + skipped_decode + skipped_dimension > 0 {
        debug!(
            skipped_missing = skipped_missing,
            skipped_decode = skipped_decode,
            skipped_dimension = skipped_dimension,
            "scan skipped invalid entries"
        );
    }

    Ok(candidates)
}
