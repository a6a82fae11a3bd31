//! Error types for the cache library
//!
//! Provides unified error handling using thiserror.
//!
//! A failed lookup is not an error: `get` and `has` communicate absence
//! through their return values. The variants here cover the narrow failure
//! surface that remains, invalid construction and invalid inputs.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Store constructed with a capacity that would allow no entries
    #[error("Invalid capacity {0}: a cache must hold at least one entry")]
    InvalidCapacity(usize),

    /// Zero TTL passed to set
    #[error("Invalid TTL for key '{0}': TTL must be greater than zero")]
    InvalidTtl(String),

    /// Empty or oversized key
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache library.
pub type Result<T> = std::result::Result<T, CacheError>;
