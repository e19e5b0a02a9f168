//! In-memory [`EmbeddingProvider`] for tests.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use super::error::EmbeddingError;
use super::EmbeddingProvider;

/// Dimension of vectors the mock derives for texts without a preset.
pub const MOCK_EMBEDDING_DIM: usize = 8;

/// Deterministic embedder: preset vectors per text, hash-derived fallback.
#[derive(Default, Clone)]
pub struct MockEmbedder {
    vectors: Arc<RwLock<HashMap<String, Vec<f32>>>>,
    fail: Arc<AtomicBool>,
    delay_ms: Arc<AtomicU64>,
}

impl MockEmbedder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the vector returned for `text`.
    pub fn insert(&self, text: &str, vector: Vec<f32>) {
        self.vectors
            .write()
            .expect("lock poisoned")
            .insert(text.to_string(), vector);
    }

    /// When set, `embed` fails with `Unreachable`.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Delays every `embed` call, for exercising deadline handling.
    pub fn set_delay(&self, delay: Duration) {
        self.delay_ms.store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    fn derive(text: &str) -> Vec<f32> {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let mut seed = hasher.finish();

        (0..MOCK_EMBEDDING_DIM)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                ((seed >> 33) % 1000) as f32 / 1000.0 - 0.5
            })
            .collect()
    }
}

impl EmbeddingProvider for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let delay_ms = self.delay_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        if self.fail.load(Ordering::SeqCst) {
            return Err(EmbeddingError::Unreachable {
                reason: "mock embedder marked as failing".to_string(),
            });
        }

        let preset = self
            .vectors
            .read()
            .expect("lock poisoned")
            .get(text)
            .cloned();

        Ok(preset.unwrap_or_else(|| Self::derive(text)))
    }
}
