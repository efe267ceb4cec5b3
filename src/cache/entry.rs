//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::ProductRecord;

// == Cache Entry ==
/// A cached product record together with the time it was stored.
///
/// An entry stored under barcode B always satisfies `record.barcode == B`.
/// Negative entries (barcode looked up, nothing found) hold a record with all
/// optional fields absent but still carry a real `stored_at` timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    /// Seconds since epoch at cache-write time
    pub stored_at: f64,
    /// The stored product record
    pub record: ProductRecord,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stored at the given time.
    pub fn new(record: ProductRecord, stored_at: f64) -> Self {
        Self { stored_at, record }
    }

    // == Is Fresh ==
    /// Checks whether the entry is still fresh at `now`.
    ///
    /// Boundary condition: an entry is fresh while strictly less than
    /// `ttl_seconds` have elapsed since it was stored. At exactly
    /// `ttl_seconds` the entry is stale and must be refreshed.
    pub fn is_fresh(&self, now: f64, ttl_seconds: u64) -> bool {
        now - self.stored_at < ttl_seconds as f64
    }

    // == Age ==
    /// Returns the entry's age in seconds at `now`, clamped to zero.
    pub fn age(&self, now: f64) -> f64 {
        (now - self.stored_at).max(0.0)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in seconds, with sub-second precision.
pub fn current_timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs_f64()
}
