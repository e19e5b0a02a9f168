//! Recall library crate (used by the server binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Core Types (Stable)
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`SemanticCache`], [`CacheConfig`] - The lookup engine
//! - [`Decision`], [`ScoredCandidate`], [`LookupOptions`] - Lookup contract
//! - [`CacheDocument`], [`decode`] - Stored document codec
//!
//! ## Collaborator Interfaces
//! - [`EmbeddingProvider`], [`OpenAiEmbedder`] - Embedding generation
//! - [`KvStore`], [`RedisStore`] - Cache document storage
//!
//! ## Utilities
//! - [`cosine_similarity`], [`dot`], [`norm`] - Vector math
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod cache;
pub mod config;
pub mod document;
pub mod embedding;
pub mod gateway;
pub mod similarity;
pub mod store;

pub use cache::{
    CacheConfig, DEFAULT_FETCH_CONCURRENCY, DEFAULT_THRESHOLD, DEFAULT_TOP_K, Decision,
    LookupError, LookupOptions, ScoredCandidate, SemanticCache,
};
pub use config::{Config, ConfigError, DEFAULT_REDIS_URL};
pub use document::{CacheDocument, DecodeError, decode};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use embedding::{EmbeddingError, EmbeddingProvider, OpenAiConfig, OpenAiEmbedder};
pub use similarity::{SimilarityError, cosine_similarity, dot, norm};
#[cfg(any(test, feature = "mock"))]
pub use store::MockKvStore;
pub use store::{DEFAULT_KEY_PREFIX, KvStore, RedisStore, StoreError};
