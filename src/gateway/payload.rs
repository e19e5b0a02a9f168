//! Wire payloads for the `/semantic_search` route.
//!
//! The response shape follows the store's external writer convention: a hit
//! carries the best answer as a text content part plus the full ranked match
//! list; a miss is an empty `content` array with HTTP 200.

use serde::{Deserialize, Serialize};

use crate::cache::{Decision, ScoredCandidate};

/// Inbound search request.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// The query to look up. Required.
    pub query: String,

    /// Maximum number of ranked results. Defaults to the server-wide setting.
    #[serde(default)]
    pub top_k: Option<i64>,

    /// Minimum similarity for a hit. Defaults to the server-wide setting.
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// One part of the `content` array.
#[derive(Debug, Serialize)]
pub struct ContentPart {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

/// One ranked match with its score.
#[derive(Debug, Serialize)]
pub struct MatchPayload {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub response: String,
    pub score: f32,
}

impl From<ScoredCandidate> for MatchPayload {
    fn from(c: ScoredCandidate) -> Self {
        Self {
            key: c.key,
            text: c.text,
            response: c.response,
            score: c.score,
        }
    }
}

/// Outbound search response.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub content: Vec<ContentPart>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<MatchPayload>,
}

impl From<Decision> for SearchResponse {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Hit { results } => {
                let best = results
                    .first()
                    .map(|c| c.response.clone())
                    .unwrap_or_default();

                Self {
                    content: vec![ContentPart {
                        kind: "text",
                        text: best,
                    }],
                    matches: results.into_iter().map(MatchPayload::from).collect(),
                }
            }
            Decision::Miss => Self {
                content: Vec::new(),
                matches: Vec::new(),
            },
        }
    }
}
