use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by key-value store operations.
///
/// A store failure is always distinguishable from "no relevant entry": these
/// errors propagate out of a lookup instead of degrading to a miss.
pub enum StoreError {
    /// Could not connect to the store endpoint.
    #[error("failed to connect to store at '{url}': {message}")]
    ConnectionFailed {
        /// Endpoint URL.
        url: String,
        /// Error message.
        message: String,
    },

    /// Key enumeration failed.
    #[error("store scan failed for pattern '{pattern}': {message}")]
    ScanFailed {
        /// The match pattern being enumerated.
        pattern: String,
        /// Error message.
        message: String,
    },

    /// Fetching a single key failed.
    #[error("store fetch failed for key '{key}': {message}")]
    FetchFailed {
        /// The key being fetched.
        key: String,
        /// Error message.
        message: String,
    },
}
