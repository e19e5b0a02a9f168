//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// A numeric environment variable could not be parsed.
    #[error("failed to parse {name}='{value}' as a number")]
    InvalidNumber { name: &'static str, value: String },

    /// The default similarity threshold is outside `[-1.0, 1.0]`.
    #[error("default threshold {value} is outside the valid range [-1.0, 1.0]")]
    ThresholdOutOfRange { value: f32 },

    /// The default result count must be at least 1.
    #[error("default top_k must be at least 1, got {value}")]
    InvalidTopK { value: usize },

    /// The fetch concurrency bound must be at least 1.
    #[error("fetch concurrency must be at least 1, got {value}")]
    InvalidConcurrency { value: usize },

    /// The key prefix may not be empty.
    #[error("key prefix may not be empty")]
    EmptyKeyPrefix,
}
