//! In-memory key/value store
//!
//! Clones of a `MemoryStore` share the same map, the way every tab of one
//! browser session sees the same local storage. Tests keep a clone to look at
//! what the repository wrote after handing the original away.
//!
//! An optional quota (in bytes of keys plus values) makes writes fail the way
//! a full local storage does.

use crate::store::{KeyValueStore, StoreResult};
use intake_core::StoreError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Shared in-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an empty store without a quota
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that rejects writes past `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        MemoryStore {
            inner: Arc::default(),
            quota: Some(bytes),
        }
    }

    /// Bytes currently used (keys plus values)
    pub fn used_bytes(&self) -> usize {
        self.inner
            .read()
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }

    /// Number of keys held
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the store holds nothing
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Drop every key
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.inner.read().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut map = self.inner.write();
        if let Some(limit) = self.quota {
            let replaced = map.get(key).map_or(0, |old| key.len() + old.len());
            let used: usize = map.iter().map(|(k, v)| k.len() + v.len()).sum();
            let needed = used - replaced + key.len() + value.len();
            if needed > limit {
                debug!(target: "intake::store", key, needed, limit, "Memory store quota exceeded");
                return Err(StoreError::QuotaExceeded { needed, limit });
            }
        }
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.inner.write().remove(key);
        Ok(())
    }
}
