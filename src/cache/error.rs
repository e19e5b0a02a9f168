use std::time::Duration;
use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::store::StoreError;

#[derive(Debug, Error)]
/// Errors returned by [`SemanticCache::lookup`](super::SemanticCache::lookup).
///
/// A genuine miss is not an error; it is [`Decision::Miss`](super::Decision).
pub enum LookupError {
    /// Rejected input: blank query, zero `top_k`, or out-of-range threshold.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was rejected.
        reason: String,
    },

    /// The embedding provider failed or rejected the request.
    #[error("embedding provider error: {0}")]
    Provider(#[from] EmbeddingError),

    /// The key-value store could not be reached or a fetch failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The whole lookup exceeded the caller-supplied deadline.
    #[error("lookup timed out after {timeout:?}")]
    Timeout {
        /// The deadline that expired.
        timeout: Duration,
    },
}
