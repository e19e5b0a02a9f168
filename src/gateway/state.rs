use std::sync::Arc;
use std::time::Duration;

use crate::cache::{LookupOptions, SemanticCache};
use crate::embedding::EmbeddingProvider;
use crate::store::KvStore;

/// Shared handler state: one engine plus request defaults.
pub struct GatewayState<E: EmbeddingProvider + 'static, S: KvStore + 'static> {
    /// The lookup engine, shared across concurrent requests.
    pub cache: Arc<SemanticCache<E, S>>,

    /// Options applied when a request omits `top_k` / `threshold`.
    pub default_options: LookupOptions,

    /// Deadline wrapped around each lookup, if configured.
    pub lookup_timeout: Option<Duration>,
}

impl<E: EmbeddingProvider, S: KvStore> GatewayState<E, S> {
    pub fn new(
        cache: Arc<SemanticCache<E, S>>,
        default_options: LookupOptions,
        lookup_timeout: Option<Duration>,
    ) -> Self {
        Self {
            cache,
            default_options,
            lookup_timeout,
        }
    }
}

impl<E: EmbeddingProvider, S: KvStore> Clone for GatewayState<E, S> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            default_options: self.default_options,
            lookup_timeout: self.lookup_timeout,
        }
    }
}
