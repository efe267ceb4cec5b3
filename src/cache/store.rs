//! Cache Store Module
//!
//! The injectable cache abstraction and its in-memory implementation.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats};
use crate::models::ProductRecord;

// == Product Cache Trait ==
/// Cache abstraction used by the request handlers.
///
/// Handlers only see this trait, so the in-memory map can be swapped for a
/// bounded or persistent store without touching request-handling logic.
pub trait ProductCache: Send + Sync + std::fmt::Debug {
    /// Returns the entry for `barcode` if one is present and still fresh at
    /// `now`. Records a hit or miss in the statistics either way.
    ///
    /// Stale entries are left in place; they are only ever replaced by a
    /// subsequent `store` for the same barcode.
    fn lookup(&mut self, barcode: &str, now: f64) -> Option<CacheEntry>;

    /// Stores a record under `barcode` at `now`, unconditionally overwriting
    /// any prior entry.
    fn store(&mut self, barcode: String, record: ProductRecord, now: f64);

    /// Checks whether an entry is fresh at `now` under this cache's TTL.
    fn is_fresh(&self, entry: &CacheEntry, now: f64) -> bool;

    /// Returns the entry for `barcode` regardless of freshness, without
    /// touching the statistics.
    fn peek(&self, barcode: &str) -> Option<CacheEntry>;

    /// Returns current cache statistics.
    fn stats(&self) -> CacheStats;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns true if the cache is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// == Memory Cache ==
/// In-memory cache keyed by barcode with a fixed TTL.
///
/// Growth is unbounded: entries are never deleted, only overwritten when a
/// lookup past the TTL triggers a refetch. Expiry is checked lazily at read
/// time; there is no background sweep.
#[derive(Debug)]
pub struct MemoryCache {
    /// Barcode to entry storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Entry time-to-live in seconds
    ttl_seconds: u64,
}

impl MemoryCache {
    // == Constructor ==
    /// Creates a new MemoryCache with the given TTL in seconds.
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl_seconds,
        }
    }

    /// Returns the configured TTL in seconds.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }
}

impl ProductCache for MemoryCache {
    fn lookup(&mut self, barcode: &str, now: f64) -> Option<CacheEntry> {
        match self.entries.get(barcode) {
            Some(entry) if entry.is_fresh(now, self.ttl_seconds) => {
                self.stats.record_hit();
                Some(entry.clone())
            }
            Some(_) => {
                // Stale entry stays in the map until the refetch overwrites it
                self.stats.record_stale();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    fn store(&mut self, barcode: String, record: ProductRecord, now: f64) {
        self.entries
            .insert(barcode, CacheEntry::new(record, now));
        self.stats.set_total_entries(self.entries.len());
    }

    fn is_fresh(&self, entry: &CacheEntry, now: f64) -> bool {
        entry.is_fresh(now, self.ttl_seconds)
    }

    fn peek(&self, barcode: &str) -> Option<CacheEntry> {
        self.entries.get(barcode).cloned()
    }

    fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
