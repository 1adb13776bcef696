//! Testing utilities for persistence failure handling
//!
//! [`FlakyStore`] wraps any store and fails reads or writes on demand. It
//! lets repository tests reproduce a full or unavailable local storage
//! without a real one.
//!
//! # Example
//!
//! ```
//! use intake_storage::testing::FlakyStore;
//! use intake_storage::{KeyValueStore, MemoryStore};
//!
//! let store = FlakyStore::new(MemoryStore::new());
//! store.fail_writes(true);
//! assert!(store.write("k", "v").is_err());
//! store.fail_writes(false);
//! assert!(store.write("k", "v").is_ok());
//! ```

use crate::store::{KeyValueStore, StoreResult};
use intake_core::StoreError;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Switches {
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
    fail_next_writes: AtomicUsize,
    attempted_writes: AtomicUsize,
}

/// Store wrapper with switchable failures
///
/// Clones share both the inner store and the failure switches.
#[derive(Debug, Clone)]
pub struct FlakyStore<S> {
    inner: S,
    switches: Arc<Switches>,
}

impl<S: KeyValueStore> FlakyStore<S> {
    /// Wrap `inner` with all failures switched off
    pub fn new(inner: S) -> Self {
        FlakyStore {
            inner,
            switches: Arc::default(),
        }
    }

    /// Fail every write until switched off
    pub fn fail_writes(&self, on: bool) {
        self.switches.fail_writes.store(on, Ordering::SeqCst);
    }

    /// Fail every read until switched off
    pub fn fail_reads(&self, on: bool) {
        self.switches.fail_reads.store(on, Ordering::SeqCst);
    }

    /// Fail only the next `n` writes
    pub fn fail_next_writes(&self, n: usize) {
        self.switches.fail_next_writes.store(n, Ordering::SeqCst);
    }

    /// Writes attempted so far, failed ones included
    pub fn attempted_writes(&self) -> usize {
        self.switches.attempted_writes.load(Ordering::SeqCst)
    }

    /// The wrapped store
    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn should_fail_write(&self) -> bool {
        if self.switches.fail_writes.load(Ordering::SeqCst) {
            return true;
        }
        self.switches
            .fail_next_writes
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

impl<S: KeyValueStore> KeyValueStore for FlakyStore<S> {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        if self.switches.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!("injected read failure for {key}")));
        }
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        self.switches.attempted_writes.fetch_add(1, Ordering::SeqCst);
        if self.should_fail_write() {
            return Err(StoreError::Unavailable(format!("injected write failure for {key}")));
        }
        self.inner.write(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        if self.switches.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!("injected remove failure for {key}")));
        }
        self.inner.remove(key)
    }
}
