//! Shared Cache Module
//!
//! A cloneable handle exposing one cache store to multiple callers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::cache::{CacheStore, StatsSnapshot};
use crate::config::Config;
use crate::error::Result;

// == Shared Cache ==
/// Thread-safe handle to a cache store.
///
/// Cloning the handle is cheap and yields another view of the same store.
/// Every operation takes the single lock guarding the entry table and its
/// counters, so each call observes and mutates the store as one atomic unit.
/// All operations are synchronous and bounded-time; nothing here suspends or
/// performs I/O.
#[derive(Debug)]
pub struct SharedCache<V> {
    /// The store behind its single mutual-exclusion boundary
    inner: Arc<Mutex<CacheStore<V>>>,
}

impl<V> Clone for SharedCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Clone> SharedCache<V> {
    // == Constructors ==
    /// Creates a new shared cache with the specified capacity.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidCapacity` if `max_entries` is zero.
    pub fn new(max_entries: usize) -> Result<Self> {
        Ok(Self::from_store(CacheStore::new(max_entries)?))
    }

    /// Creates a new shared cache sized from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::from_store(CacheStore::from_config(config)?))
    }

    /// Wraps an existing store in a shared handle.
    pub fn from_store(store: CacheStore<V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    // == Operations ==
    /// Stores a key-value pair with the given TTL.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) -> Result<()> {
        self.lock().set(key, value, ttl)
    }

    /// Retrieves a value by key, counting a hit or a miss.
    pub fn get(&self, key: &str) -> Option<V> {
        self.lock().get(key)
    }

    /// Checks presence without touching the hit/miss counters.
    pub fn has(&self, key: &str) -> bool {
        self.lock().has(key)
    }

    /// Removes an entry by key; returns true if it existed.
    pub fn delete(&self, key: &str) -> bool {
        self.lock().delete(key)
    }

    /// Empties all entries and resets statistics.
    pub fn clear(&self) {
        self.lock().clear()
    }

    /// Returns a snapshot of the current cache statistics.
    pub fn stats(&self) -> StatsSnapshot {
        self.lock().stats()
    }

    /// Removes all expired entries; returns the number removed.
    pub fn purge_expired(&self) -> usize {
        self.lock().purge_expired()
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Acquires the store lock.
    ///
    /// A poisoned lock is recovered: store operations never panic mid-mutation,
    /// so the table behind a poisoned guard is still consistent.
    fn lock(&self) -> MutexGuard<'_, CacheStore<V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
