//! Key-value store integration.
//!
//! The cache reads from an externally-populated store through the narrow
//! [`KvStore`] interface: prefix-based key enumeration plus per-key fetch.
//! [`RedisStore`] is the production implementation.

mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod redis;

#[cfg(test)]
mod tests;

pub use error::StoreError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockKvStore;
pub use redis::RedisStore;

/// Key namespace all cache documents live under.
pub const DEFAULT_KEY_PREFIX: &str = "semantic:";

/// Minimal async interface the lookup engine scans against.
///
/// Implementations must be safe for concurrent use; the engine issues
/// overlapping calls from concurrent lookups and from parallel fetches within
/// one scan.
pub trait KvStore: Send + Sync {
    /// Enumerates every key under `prefix`.
    ///
    /// Best-effort live enumeration: keys added or removed while the scan runs
    /// may or may not appear, and a returned key is not guaranteed to still
    /// hold a value by the time it is fetched. Ordering is unspecified.
    fn keys_with_prefix(
        &self,
        prefix: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>, StoreError>> + Send;

    /// Fetches the raw value for `key`, or `None` if the key is absent.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<u8>>, StoreError>> + Send;
}
