use serde::Serialize;

/// Default minimum similarity a candidate must reach to count as a hit.
pub const DEFAULT_THRESHOLD: f32 = 0.80;

/// Default number of ranked results returned from a lookup.
pub const DEFAULT_TOP_K: usize = 1;

/// Per-call lookup parameters.
///
/// Both knobs have crate-level defaults but are always overridable per call;
/// neither is a hidden constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookupOptions {
    /// Maximum number of ranked results. Must be at least 1.
    pub top_k: usize,
    /// Inclusive similarity threshold in `[-1.0, 1.0]`.
    pub threshold: f32,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl LookupOptions {
    pub fn new(top_k: usize, threshold: f32) -> Self {
        Self { top_k, threshold }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }
}

/// A cache entry scored against the current query.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate {
    /// Store key the entry was read from.
    pub key: String,
    /// The query text the entry was cached for (diagnostic, optional).
    pub text: Option<String>,
    /// The cached answer payload.
    pub response: String,
    /// Cosine similarity against the query embedding.
    pub score: f32,
}

/// Outcome of one lookup.
#[derive(Debug, Clone)]
pub enum Decision {
    /// At least one entry cleared the threshold. `results` is ordered by
    /// descending score and holds at most `top_k` entries; `results[0]` is
    /// the best response.
    Hit {
        /// Ranked surviving candidates.
        results: Vec<ScoredCandidate>,
    },
    /// No entry cleared the threshold. Not an error: callers fall through to
    /// their fallback (usually the full model).
    Miss,
}

impl Decision {
    /// Returns `true` for a hit.
    pub fn is_hit(&self) -> bool {
        matches!(self, Decision::Hit { .. })
    }

    /// The best-scoring candidate, if any.
    pub fn best(&self) -> Option<&ScoredCandidate> {
        match self {
            Decision::Hit { results } => results.first(),
            Decision::Miss => None,
        }
    }
}
