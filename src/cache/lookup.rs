use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::embedding::EmbeddingProvider;
use crate::store::{DEFAULT_KEY_PREFIX, KvStore};

use super::error::LookupError;
use super::ranking::filter_and_rank;
use super::scanner::scan_candidates;
use super::types::{Decision, LookupOptions};

/// Default bound on concurrent store fetches within one scan.
pub const DEFAULT_FETCH_CONCURRENCY: usize = 16;

/// Engine-level configuration, fixed for the lifetime of a [`SemanticCache`].
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Key namespace scanned on every lookup.
    pub key_prefix: String,
    /// Bound on concurrent store fetches within one scan.
    pub fetch_concurrency: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }
}

/// The semantic cache lookup engine.
///
/// A pure pipeline over two injected collaborators: embed the query, scan the
/// store namespace, score and rank candidates, decide hit or miss. The engine
/// holds no mutable state of its own, so concurrent lookups are safe as long
/// as the embedder and store are (both interfaces require `Send + Sync`).
pub struct SemanticCache<E: EmbeddingProvider, S: KvStore> {
    embedder: E,
    store: S,
    config: CacheConfig,
}

impl<E: EmbeddingProvider, S: KvStore> std::fmt::Debug for SemanticCache<E, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticCache")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<E: EmbeddingProvider, S: KvStore> SemanticCache<E, S> {
    /// Builds an engine over an embedder and a store handle.
    pub fn new(embedder: E, store: S, config: CacheConfig) -> Self {
        Self {
            embedder,
            store,
            config,
        }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Looks up the closest cached answers for `query`.
    ///
    /// Returns [`Decision::Hit`] with at most `options.top_k` candidates, all
    /// scoring at least `options.threshold` and ordered by descending score,
    /// or [`Decision::Miss`] when nothing clears the threshold. Provider and
    /// store failures propagate as typed errors and are never reported as a
    /// miss. No retries are performed at this level.
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn lookup(
        &self,
        query: &str,
        options: LookupOptions,
    ) -> Result<Decision, LookupError> {
        if query.trim().is_empty() {
            return Err(LookupError::InvalidArgument {
                reason: "query is empty".to_string(),
            });
        }
        validate_options(&options)?;

        debug!("generating query embedding");
        let query_vector = self.embedder.embed(query).await?;

        let candidates = scan_candidates(
            &self.store,
            &self.config.key_prefix,
            &query_vector,
            self.config.fetch_concurrency,
        )
        .await?;
        let scanned = candidates.len();

        let results = filter_and_rank(candidates, options.threshold, options.top_k);

        info!(
            scanned = scanned,
            survivors = results.len(),
            threshold = options.threshold,
            top_k = options.top_k,
            best_score = results.first().map(|c| c.score),
            "lookup complete"
        );

        if results.is_empty() {
            Ok(Decision::Miss)
        } else {
            Ok(Decision::Hit { results })
        }
    }

    /// [`lookup`](Self::lookup) bounded by a wall-clock deadline.
    ///
    /// On expiry, in-flight embedding and store calls are abandoned and
    /// [`LookupError::Timeout`] is returned.
    pub async fn lookup_with_timeout(
        &self,
        query: &str,
        options: LookupOptions,
        timeout: Duration,
    ) -> Result<Decision, LookupError> {
        tokio::time::timeout(timeout, self.lookup(query, options))
            .await
            .map_err(|_| LookupError::Timeout { timeout })?
    }
}

fn validate_options(options: &LookupOptions) -> Result<(), LookupError> {
    if options.top_k == 0 {
        return Err(LookupError::InvalidArgument {
            reason: "top_k must be at least 1".to_string(),
        });
    }

    if !options.threshold.is_finite() || !(-1.0..=1.0).contains(&options.threshold) {
        return Err(LookupError::InvalidArgument {
            reason: format!(
                "threshold {} is outside the valid range [-1.0, 1.0]",
                options.threshold
            ),
        });
    }

    Ok(())
}
