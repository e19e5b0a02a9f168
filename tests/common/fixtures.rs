//! Test fixtures for integration tests.

use recall::{MockEmbedder, MockKvStore};
use serde_json::json;

/// Query text every fixture engine pins to the unit x-axis.
pub const QUERY: &str = "what is the capital of france?";

/// Embedding assigned to [`QUERY`] by [`seeded_engine_parts`].
pub const QUERY_AXIS: [f32; 2] = [1.0, 0.0];

/// Builds the JSON document bytes stored under a cache key.
#[derive(Default)]
pub struct DocumentBuilder {
    text: Option<String>,
    response: Option<String>,
    embedding: Option<Vec<f32>>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn response(mut self, response: &str) -> Self {
        self.response = Some(response.to_string());
        self
    }

    pub fn embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Embedding that scores exactly `score` against [`QUERY_AXIS`].
    ///
    /// Both vectors are unit length, so the cosine similarity collapses to
    /// the dot product: `[s, sqrt(1 - s^2)] . [1, 0] = s`.
    pub fn scoring(mut self, score: f32) -> Self {
        self.embedding = Some(vec![score, (1.0 - score * score).max(0.0).sqrt()]);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut doc = json!({
            "response": self.response.unwrap_or_else(|| "cached answer".to_string()),
            "embedding": self.embedding.unwrap_or_else(|| QUERY_AXIS.to_vec()),
        });
        if let Some(text) = self.text {
            doc["text"] = json!(text);
        }
        serde_json::to_vec(&doc).expect("fixture document must serialize")
    }
}

/// A mock embedder/store pair with [`QUERY`] pinned to [`QUERY_AXIS`].
pub fn seeded_engine_parts() -> (MockEmbedder, MockKvStore) {
    let embedder = MockEmbedder::new();
    embedder.insert(QUERY, QUERY_AXIS.to_vec());
    (embedder, MockKvStore::new())
}

/// Seeds `store` with one entry per `(key_suffix, score, response)` triple.
pub fn seed_scored_entries(store: &MockKvStore, entries: &[(&str, f32, &str)]) {
    for (suffix, score, response) in entries {
        store.insert(
            &format!("semantic:{suffix}"),
            DocumentBuilder::new()
                .response(response)
                .scoring(*score)
                .build(),
        );
    }
}
