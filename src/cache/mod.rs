//! Cache Module
//!
//! Provides in-memory caching of product records with lazy TTL expiry.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp, CacheEntry};
pub use stats::CacheStats;
pub use store::{MemoryCache, ProductCache};

// == Public Constants ==
/// Default cache entry time-to-live in seconds (one hour)
pub const DEFAULT_TTL_SECONDS: u64 = 3600;
