//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with insertion-order eviction
//! and TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, InsertionOrder, StatsSnapshot, MAX_KEY_LENGTH};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Bounded cache storage with oldest-first eviction and lazy TTL expiry.
///
/// Capacity is fixed at construction and enforced after every write: when an
/// insert pushes the table over capacity, the oldest-inserted entries are
/// evicted until the bound holds again. Expired entries are removed lazily,
/// on the next `get` or `has` that touches them; there is no background
/// sweeper.
///
/// Reads never update the eviction order. A frequently-read key inserted long
/// ago is still the first eviction candidate; that is the deliberate
/// trade-off for keeping reads free of order bookkeeping.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Insertion-order tracker driving eviction
    order: InsertionOrder,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with the specified capacity.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the cache can hold
    ///
    /// # Errors
    /// Returns `CacheError::InvalidCapacity` if `max_entries` is zero. An
    /// unbounded store is never produced silently.
    pub fn new(max_entries: usize) -> Result<Self> {
        if max_entries == 0 {
            return Err(CacheError::InvalidCapacity(max_entries));
        }

        Ok(Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            max_entries,
        })
    }

    /// Creates a new CacheStore sized from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.max_entries)
    }

    // == Set ==
    /// Stores a key-value pair with the given TTL.
    ///
    /// If the key already exists, the value is overwritten, the TTL restarts,
    /// and the key is refreshed to the most-recent insertion position. An
    /// overwrite does not grow the table, so it never evicts other keys.
    ///
    /// If the insert pushes the table over capacity, oldest-inserted entries
    /// are evicted until the size is back at the bound.
    ///
    /// # Arguments
    /// * `key` - The key to store (non-empty, at most `MAX_KEY_LENGTH` bytes)
    /// * `value` - The value to store
    /// * `ttl` - Time-to-live; must be greater than zero
    ///
    /// # Errors
    /// Returns `CacheError::InvalidKey` for an empty or oversized key, and
    /// `CacheError::InvalidTtl` for a zero TTL. Neither inserts anything.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Duration) -> Result<()> {
        let key = key.into();

        if key.is_empty() {
            return Err(CacheError::InvalidKey("key must not be empty".to_string()));
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidKey(format!(
                "key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        // A zero TTL would insert an entry that is already expired; reject it
        // instead of silently discarding the caller's value.
        if ttl.is_zero() {
            return Err(CacheError::InvalidTtl(key));
        }

        let entry = CacheEntry::new(value, ttl);
        self.entries.insert(key.clone(), entry);
        self.order.record(&key);

        // Enforce the capacity bound, oldest inserted first
        while self.entries.len() > self.max_entries {
            match self.order.pop_oldest() {
                Some(evicted_key) => {
                    self.entries.remove(&evicted_key);
                    self.stats.record_eviction();
                    debug!(key = %evicted_key, "evicted oldest entry to satisfy capacity");
                }
                None => break,
            }
        }

        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the stored value if the key is present and not expired. An
    /// expired entry is removed and reported as absent. Every call increments
    /// exactly one of the hit or miss counters.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.remove_expired(key);
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Has ==
    /// Checks whether a key is present and not expired.
    ///
    /// Performs the same lazy cleanup as `get` when it finds an expired
    /// entry, but is a pure existence probe: the hit/miss counters are left
    /// untouched.
    ///
    /// # Arguments
    /// * `key` - The key to check
    pub fn has(&mut self, key: &str) -> bool {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.remove_expired(key);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Returns true if the key existed. A no-op on absent keys; never affects
    /// the hit/miss counters.
    ///
    /// # Arguments
    /// * `key` - The key to delete
    pub fn delete(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.order.remove(key);
            true
        } else {
            false
        }
    }

    // == Clear ==
    /// Empties all entries and resets statistics to zero.
    ///
    /// Clear represents a fresh start for both data and counters.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.order.clear();
        self.stats.reset();
        debug!(removed, "cache cleared");
    }

    // == Stats ==
    /// Returns a snapshot of the current cache statistics.
    ///
    /// The store keeps accumulating after the call.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.entries.len())
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// A synchronous sweep for callers that want bounded memory under sparse
    /// reads; nothing schedules it automatically. Does not affect the
    /// hit/miss counters.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.order.remove(&key);
        }

        if count > 0 {
            debug!(removed = count, "purged expired entries");
        }
        count
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    /// Returns the maximum number of entries the cache can hold.
    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    /// Removes an entry found expired during a lookup.
    fn remove_expired(&mut self, key: &str) {
        self.entries.remove(key);
        self.order.remove(key);
        debug!(key, "removed expired entry on access");
    }
}
