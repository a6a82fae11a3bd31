//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance counters.
///
/// Counters only grow for the lifetime of the store; `reset` (driven by the
/// store's `clear`) is the single path back to zero.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Number of entries evicted to satisfy the capacity bound
    pub evictions: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate as a percentage (0.0 to 100.0).
    ///
    /// Returns 0.0 (not NaN) if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64 * 100.0
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Reset ==
    /// Resets all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // == Snapshot ==
    /// Captures the current counters as an immutable snapshot.
    ///
    /// The store keeps accumulating after the call; the snapshot does not.
    pub fn snapshot(&self, total_entries: usize) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            total_entries,
            hit_rate: self.hit_rate(),
            captured_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// == Stats Snapshot ==
/// Point-in-time view of cache statistics, suitable for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Number of entries in the cache at capture time
    pub total_entries: usize,
    /// Hit rate as a percentage of all lookups
    pub hit_rate: f64,
    /// Capture timestamp in ISO 8601 format
    pub captured_at: String,
}
