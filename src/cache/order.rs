//! Insertion Order Module
//!
//! Tracks the order in which keys were inserted, for oldest-first eviction.

use std::collections::VecDeque;

// == Insertion Order Tracker ==
/// Tracks key insertion order for first-in-first-out eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest inserted
/// - Back = Most recently inserted
///
/// Only writes move a key: reads never reorder, so a frequently-read key
/// still ages out in its original insertion position.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    /// Keys ordered by insertion time
    order: VecDeque<String>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty insertion-order tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record ==
    /// Records an insertion for a key (moves to the most-recent position).
    ///
    /// An overwrite counts as a fresh insertion: the key is removed from its
    /// old position and appended at the back.
    pub fn record(&mut self, key: &str) {
        self.remove(key);
        self.order.push_back(key.to_string());
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Pop Oldest ==
    /// Returns and removes the oldest-inserted key.
    ///
    /// Returns None if the tracker is empty.
    pub fn pop_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the oldest-inserted key without removing it.
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.front()
    }

    // == Clear ==
    /// Removes all tracked keys.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    #[allow(dead_code)]
    pub fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key)
    }
}
