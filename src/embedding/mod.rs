//! Embedding provider integration.
//!
//! The engine treats the embedding model as an opaque capability: text in,
//! fixed-length `f32` vector out. [`OpenAiEmbedder`] talks to any
//! OpenAI-compatible `/v1/embeddings` endpoint.

mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod openai;

#[cfg(test)]
mod tests;

pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
pub use openai::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiConfig, OpenAiEmbedder};

/// Maps text to a comparable embedding vector.
///
/// Re-embedding the same text must yield vectors of equal dimension across the
/// write-time and query-time paths; the scanner skips entries whose dimension
/// disagrees with the query vector.
pub trait EmbeddingProvider: Send + Sync {
    /// Embeds `text`. One blocking call, no retries.
    fn embed(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Vec<f32>, EmbeddingError>> + Send;
}
