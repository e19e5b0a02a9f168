//! The semantic cache lookup engine.
//!
//! Straight pipeline: query text → embedding → [`scanner`] over the store
//! namespace → [`ranking`] against the threshold → [`Decision`].

mod error;
pub mod lookup;
mod ranking;
mod scanner;
pub mod types;


pub use error::LookupError;
pub use lookup::{CacheConfig, DEFAULT_FETCH_CONCURRENCY, SemanticCache};
pub use types::{DEFAULT_THRESHOLD, DEFAULT_TOP_K, Decision, LookupOptions, ScoredCandidate};
