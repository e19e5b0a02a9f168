//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `RECALL_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::time::Duration;

use crate::cache::{DEFAULT_FETCH_CONCURRENCY, DEFAULT_THRESHOLD, DEFAULT_TOP_K};
use crate::embedding::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::store::DEFAULT_KEY_PREFIX;

/// Default Redis URL used when `RECALL_REDIS_URL` is not set.
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RECALL_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Redis endpoint URL. Default: `redis://127.0.0.1:6379`.
    pub redis_url: String,

    /// Key namespace scanned for cache documents. Default: `semantic:`.
    pub key_prefix: String,

    /// Embedding endpoint base URL. Default: `https://api.openai.com`.
    pub embedding_endpoint: String,

    /// Bearer token for the embedding endpoint, if it requires one.
    pub embedding_api_key: Option<String>,

    /// Embedding model (or deployment) name.
    pub embedding_model: String,

    /// Similarity threshold applied when a request does not override it.
    /// Default: `0.80`.
    pub default_threshold: f32,

    /// Result count applied when a request does not override it. Default: `1`.
    pub default_top_k: usize,

    /// Bound on concurrent store fetches within one scan. Default: `16`.
    pub fetch_concurrency: usize,

    /// Wall-clock deadline for a whole lookup, if set.
    pub lookup_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            redis_url: DEFAULT_REDIS_URL.to_string(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            embedding_endpoint: DEFAULT_BASE_URL.to_string(),
            embedding_api_key: None,
            embedding_model: DEFAULT_MODEL.to_string(),
            default_threshold: DEFAULT_THRESHOLD,
            default_top_k: DEFAULT_TOP_K,
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
            lookup_timeout: None,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "RECALL_PORT";
    const ENV_BIND_ADDR: &'static str = "RECALL_BIND_ADDR";
    const ENV_REDIS_URL: &'static str = "RECALL_REDIS_URL";
    const ENV_KEY_PREFIX: &'static str = "RECALL_KEY_PREFIX";
    const ENV_EMBEDDING_ENDPOINT: &'static str = "RECALL_EMBEDDING_ENDPOINT";
    const ENV_EMBEDDING_API_KEY: &'static str = "RECALL_EMBEDDING_API_KEY";
    const ENV_EMBEDDING_MODEL: &'static str = "RECALL_EMBEDDING_MODEL";
    const ENV_DEFAULT_THRESHOLD: &'static str = "RECALL_DEFAULT_THRESHOLD";
    const ENV_DEFAULT_TOP_K: &'static str = "RECALL_DEFAULT_TOP_K";
    const ENV_FETCH_CONCURRENCY: &'static str = "RECALL_FETCH_CONCURRENCY";
    const ENV_LOOKUP_TIMEOUT_SECS: &'static str = "RECALL_LOOKUP_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let redis_url = Self::parse_string_from_env(Self::ENV_REDIS_URL, defaults.redis_url);
        let key_prefix = Self::parse_string_from_env(Self::ENV_KEY_PREFIX, defaults.key_prefix);
        let embedding_endpoint = Self::parse_string_from_env(
            Self::ENV_EMBEDDING_ENDPOINT,
            defaults.embedding_endpoint,
        );
        let embedding_api_key = Self::parse_optional_string_from_env(Self::ENV_EMBEDDING_API_KEY);
        let embedding_model =
            Self::parse_string_from_env(Self::ENV_EMBEDDING_MODEL, defaults.embedding_model);
        let default_threshold =
            Self::parse_f32_from_env(Self::ENV_DEFAULT_THRESHOLD, defaults.default_threshold)?;
        let default_top_k =
            Self::parse_usize_from_env(Self::ENV_DEFAULT_TOP_K, defaults.default_top_k)?;
        let fetch_concurrency =
            Self::parse_usize_from_env(Self::ENV_FETCH_CONCURRENCY, defaults.fetch_concurrency)?;
        let lookup_timeout = Self::parse_optional_string_from_env(Self::ENV_LOOKUP_TIMEOUT_SECS)
            .map(|v| {
                v.parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|_| ConfigError::InvalidNumber {
                        name: Self::ENV_LOOKUP_TIMEOUT_SECS,
                        value: v,
                    })
            })
            .transpose()?;

        Ok(Self {
            port,
            bind_addr,
            redis_url,
            key_prefix,
            embedding_endpoint,
            embedding_api_key,
            embedding_model,
            default_threshold,
            default_top_k,
            fetch_concurrency,
            lookup_timeout,
        })
    }

    /// Validates ranges and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key_prefix.is_empty() {
            return Err(ConfigError::EmptyKeyPrefix);
        }

        if !self.default_threshold.is_finite()
            || !(-1.0..=1.0).contains(&self.default_threshold)
        {
            return Err(ConfigError::ThresholdOutOfRange {
                value: self.default_threshold,
            });
        }

        if self.default_top_k == 0 {
            return Err(ConfigError::InvalidTopK {
                value: self.default_top_k,
            });
        }

        if self.fetch_concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency {
                value: self.fetch_concurrency,
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_f32_from_env(var_name: &'static str, default: f32) -> Result<f32, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidNumber {
                name: var_name,
                value,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidNumber {
                name: var_name,
                value,
            }),
            Err(_) => Ok(default),
        }
    }
}
