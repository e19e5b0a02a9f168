use std::fmt;

use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use super::error::StoreError;
use super::KvStore;

/// Batch size hint passed to Redis `SCAN`.
const SCAN_COUNT: usize = 100;

/// Redis-backed [`KvStore`].
///
/// Holds a [`ConnectionManager`], so clones share one multiplexed connection
/// with automatic reconnection. Enumeration uses a `SCAN`/`MATCH` cursor loop
/// rather than `KEYS` so large namespaces do not block the server.
#[derive(Clone)]
pub struct RedisStore {
    connection: ConnectionManager,
    url: String,
}

impl fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisStore")
            .field("url", &self.url)
            .field("connection", &"<ConnectionManager>")
            .finish()
    }
}

impl RedisStore {
    /// Connects to Redis at `url` (e.g. `redis://127.0.0.1:6379`).
    ///
    /// Fails fast: an unreachable server is reported here, at process start,
    /// rather than on the first lookup.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(url).map_err(|e| StoreError::ConnectionFailed {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let connection =
            ConnectionManager::new(client)
                .await
                .map_err(|e| StoreError::ConnectionFailed {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;

        Ok(Self {
            connection,
            url: url.to_string(),
        })
    }

    /// Returns the configured URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Performs a `PING` round trip.
    pub async fn health_check(&self) -> Result<(), StoreError> {
        let mut conn = self.connection.clone();
        redis::cmd("PING")
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| StoreError::ConnectionFailed {
                url: self.url.clone(),
                message: e.to_string(),
            })
    }
}

impl KvStore for RedisStore {
    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let pattern = format!("{prefix}*");
        let mut conn = self.connection.clone();

        let mut cursor = 0u64;
        let mut keys = Vec::new();

        loop {
            let (next_cursor, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_COUNT)
                .query_async(&mut conn)
                .await
                .map_err(|e| StoreError::ScanFailed {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;

            keys.extend(batch);
            cursor = next_cursor;

            if cursor == 0 {
                break;
            }
        }

        Ok(keys)
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let mut conn = self.connection.clone();

        let raw: Option<Vec<u8>> =
            conn.get(key).await.map_err(|e| StoreError::FetchFailed {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        Ok(raw)
    }
}
