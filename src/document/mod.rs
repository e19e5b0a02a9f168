//! Cache document codec.
//!
//! Cached answers are stored as JSON documents under `semantic:<id>` keys:
//!
//! ```json
//! {"text": "original query", "response": "cached answer", "embedding": [0.1, ...]}
//! ```
//!
//! `text` is diagnostic-only and optional. `response` and `embedding` are
//! required; a document missing either is not a valid cache entry and the
//! scanner skips it.

mod error;

#[cfg(test)]
mod tests;

pub use error::DecodeError;

use serde::Deserialize;

/// A decoded cache entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheDocument {
    /// The query text this entry was cached for, if the writer recorded it.
    pub text: Option<String>,
    /// The cached answer payload, treated as opaque pass-through text.
    pub response: String,
    /// Embedding of `text`, computed at write time.
    pub embedding: Vec<f32>,
}

/// Wire shape before required-field validation.
#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    embedding: Option<Vec<f32>>,
}

/// Decodes a stored payload into a [`CacheDocument`].
///
/// Returns an error for non-JSON payloads and for documents missing
/// `response` or `embedding`. Decode failures are per-entry: callers skip the
/// entry and keep scanning.
pub fn decode(raw: &[u8]) -> Result<CacheDocument, DecodeError> {
    let raw: RawDocument =
        serde_json::from_slice(raw).map_err(|e| DecodeError::Malformed {
            reason: e.to_string(),
        })?;

    let response = raw
        .response
        .ok_or(DecodeError::MissingField { field: "response" })?;
    let embedding = raw
        .embedding
        .ok_or(DecodeError::MissingField { field: "embedding" })?;

    Ok(CacheDocument {
        text: raw.text,
        response,
        embedding,
    })
}
