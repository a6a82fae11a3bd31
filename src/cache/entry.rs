//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// Represents a single cache entry with value and expiry metadata.
///
/// The payload type is opaque to the cache: entries carry it unchanged and
/// never inspect it. One concrete payload type per store instance.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` from now.
    ///
    /// The store validates the TTL before constructing entries; a zero `ttl`
    /// here would produce an entry that is already expired.
    pub fn new(value: V, ttl: Duration) -> Self {
        let now = current_timestamp_ms();

        Self {
            value,
            inserted_at: now,
            expires_at: now + ttl.as_millis() as u64,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is considered expired when the current
    /// time is greater than or equal to the expiration time, so an entry
    /// whose TTL has fully elapsed is never served again.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, or 0 if the entry has expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value".to_string(), Duration::from_secs(60));

        assert_eq!(entry.value, "test_value");
        assert!(entry.expires_at > entry.inserted_at);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        // Create entry with 50ms TTL
        let entry = CacheEntry::new("test_value".to_string(), Duration::from_millis(50));

        assert!(!entry.is_expired());

        // Wait for expiration
        sleep(Duration::from_millis(120));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_ttl_remaining_ms() {
        let entry = CacheEntry::new("test_value".to_string(), Duration::from_secs(10));

        let remaining_ms = entry.ttl_remaining_ms();
        assert!(remaining_ms <= 10_000);
        assert!(remaining_ms >= 9_000);
    }

    #[test]
    fn test_ttl_remaining_expired() {
        let entry = CacheEntry::new("test_value".to_string(), Duration::from_millis(10));

        sleep(Duration::from_millis(50));

        // TTL remaining saturates at 0 once expired
        assert_eq!(entry.ttl_remaining_ms(), 0);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        // Construct an entry expiring exactly at its insertion time
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            value: "test".to_string(),
            inserted_at: now,
            expires_at: now,
        };

        // Entry is expired when current time >= expires_at
        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }

    #[test]
    fn test_entry_non_string_payload() {
        let entry = CacheEntry::new(vec![1u8, 2, 3], Duration::from_secs(5));

        assert_eq!(entry.value, vec![1, 2, 3]);
        assert!(!entry.is_expired());
    }
}
