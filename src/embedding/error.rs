use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by an embedding provider.
///
/// Provider failures surface to the caller as-is; they are never folded into a
/// cache miss.
pub enum EmbeddingError {
    /// The endpoint could not be reached.
    #[error("embedding endpoint unreachable: {reason}")]
    Unreachable {
        /// Transport error message.
        reason: String,
    },

    /// The endpoint rejected the request.
    #[error("embedding request rejected with status {status}: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body or status text.
        message: String,
    },

    /// The response body could not be interpreted.
    #[error("malformed embedding response: {reason}")]
    BadResponse {
        /// Parser error message.
        reason: String,
    },

    /// The provider configuration is invalid.
    #[error("invalid embedder configuration: {reason}")]
    InvalidConfig {
        /// What was wrong.
        reason: String,
    },
}
