//! Content Cache - a bounded in-memory TTL cache
//!
//! Provides time-bounded key-value caching with insertion-order eviction and
//! hit/miss statistics. Intended to be embedded in-process, one store per
//! cached resource type; expiry is checked lazily on access and there is no
//! background sweeper.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheStore, SharedCache, StatsSnapshot};
pub use config::Config;
pub use error::{CacheError, Result};
