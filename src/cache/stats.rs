//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and stale reads.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of fresh cache retrievals
    pub hits: u64,
    /// Number of lookups with no usable entry (absent or stale)
    pub misses: u64,
    /// Number of misses caused by a stale entry
    pub stale: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
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

    // == Record Stale ==
    /// Increments both the stale and miss counters.
    ///
    /// A stale read is a miss from the caller's perspective; the stale counter
    /// only tracks how many misses were refreshes rather than first lookups.
    pub fn record_stale(&mut self) {
        self.stale += 1;
        self.misses += 1;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
