//! In-memory [`KvStore`] for tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use super::error::StoreError;
use super::KvStore;

/// In-memory store with controls for failure injection.
///
/// `insert_phantom_key` registers a key that shows up in enumeration but has
/// no value, simulating a key deleted between `SCAN` and `GET`.
#[derive(Default, Clone)]
pub struct MockKvStore {
    entries: Arc<RwLock<BTreeMap<String, Option<Vec<u8>>>>>,
    unavailable: Arc<AtomicBool>,
}

impl MockKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, value: impl Into<Vec<u8>>) {
        self.entries
            .write()
            .expect("lock poisoned")
            .insert(key.to_string(), Some(value.into()));
    }

    /// Registers a key with no backing value.
    pub fn insert_phantom_key(&self, key: &str) {
        self.entries
            .write()
            .expect("lock poisoned")
            .insert(key.to_string(), None);
    }

    pub fn remove(&self, key: &str) {
        self.entries.write().expect("lock poisoned").remove(key);
    }

    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// When set, every store operation fails with `ConnectionFailed`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::ConnectionFailed {
                url: "mock://".to_string(),
                message: "store marked unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl KvStore for MockKvStore {
    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        self.check_available()?;

        Ok(self
            .entries
            .read()
            .expect("lock poisoned")
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.check_available()?;

        Ok(self
            .entries
            .read()
            .expect("lock poisoned")
            .get(key)
            .and_then(|v| v.clone()))
    }
}
