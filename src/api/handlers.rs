//! API Handlers
//!
//! HTTP request handlers for each proxy endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, info};

use crate::cache::{current_timestamp, MemoryCache, ProductCache};
use crate::error::{ApiError, Result};
use crate::models::{HealthResponse, ProductRecord, StatsResponse};
use crate::upstream::UpstreamClient;

/// Application state shared across all handlers.
///
/// The cache sits behind the `ProductCache` trait so it can be swapped for a
/// bounded or persistent store without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<RwLock<dyn ProductCache>>,
    /// Client for the upstream product database
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Creates a new AppState with the given cache and upstream client.
    pub fn new(cache: Arc<RwLock<dyn ProductCache>>, upstream: UpstreamClient) -> Self {
        Self { cache, upstream }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Initializes an in-memory cache with the configured TTL and an
    /// upstream client with the configured base URL and timeout.
    pub fn from_config(config: &crate::config::Config) -> anyhow::Result<Self> {
        let cache = Arc::new(RwLock::new(MemoryCache::new(config.cache_ttl)));
        let upstream = UpstreamClient::from_config(config)?;
        Ok(Self::new(cache, upstream))
    }
}

/// Handler for GET /product/:barcode
///
/// Serves the product from cache when a fresh entry exists, otherwise
/// fetches it upstream and caches the outcome. A failed or empty upstream
/// lookup is cached negatively and answered with 404; a later lookup that
/// hits the fresh negative entry serves it as 200 like any other cached
/// record, distinguishable only by its field contents.
pub async fn product_handler(
    State(state): State<AppState>,
    Path(barcode): Path<String>,
) -> Result<Json<ProductRecord>> {
    let barcode = barcode.trim().to_string();
    if barcode.is_empty() {
        return Err(ApiError::InvalidBarcode);
    }

    // One time capture for the whole request
    let now = current_timestamp();

    {
        let mut cache = state.cache.write().await;
        if let Some(entry) = cache.lookup(&barcode, now) {
            // Positive or negative entry alike: a fresh hit is served as-is
            debug!(%barcode, age = entry.age(now), "serving from cache");
            return Ok(Json(entry.record));
        }
    }
    // Lock released here: the upstream call may block for seconds and must
    // not stall lookups for other barcodes.

    let fetched = state.upstream.fetch(&barcode).await;

    let mut cache = state.cache.write().await;
    match fetched {
        Some(record) => {
            info!(%barcode, "fetched product from upstream");
            cache.store(barcode, record.clone(), now);
            Ok(Json(record))
        }
        None => {
            // Negative cache: remember the failed lookup until the TTL lapses
            cache.store(barcode.clone(), ProductRecord::absent(barcode.as_str(), now), now);
            Err(ApiError::ProductNotFound)
        }
    }
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Read lock is enough for stats
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.stale,
        stats.total_entries,
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state(upstream_url: &str, ttl: u64) -> AppState {
        let cache = Arc::new(RwLock::new(MemoryCache::new(ttl)));
        let upstream = UpstreamClient::new(upstream_url, 1).unwrap();
        AppState::new(cache, upstream)
    }

    // Upstream pointed at a closed port: every fetch fails
    fn unreachable_state() -> AppState {
        test_state("http://127.0.0.1:1/api/v0/product", 3600)
    }

    #[tokio::test]
    async fn test_product_handler_empty_barcode() {
        let state = unreachable_state();

        let result = product_handler(State(state), Path("   ".to_string())).await;
        assert!(matches!(result, Err(ApiError::InvalidBarcode)));
    }

    #[tokio::test]
    async fn test_product_handler_upstream_down_writes_negative_entry() {
        let state = unreachable_state();

        let result = product_handler(State(state.clone()), Path("12345".to_string())).await;
        assert!(matches!(result, Err(ApiError::ProductNotFound)));

        let cache = state.cache.read().await;
        let entry = cache.peek("12345").expect("negative entry should exist");
        assert!(entry.record.is_absent());
        assert!(entry.stored_at > 0.0);
    }

    #[tokio::test]
    async fn test_product_handler_serves_fresh_cache_without_upstream() {
        let state = unreachable_state();

        // Seed the cache directly; the unreachable upstream proves the
        // second call never leaves the process
        let now = current_timestamp();
        let record = ProductRecord {
            barcode: "12345".to_string(),
            name: Some("Example Cereal".to_string()),
            brands: None,
            ingredients: None,
            source: Some("OpenFoodFacts".to_string()),
            timestamp: now,
        };
        state
            .cache
            .write()
            .await
            .store("12345".to_string(), record.clone(), now);

        let result = product_handler(State(state), Path("12345".to_string())).await;
        let Json(served) = result.unwrap();
        assert_eq!(served, record);
    }

    #[tokio::test]
    async fn test_product_handler_serves_fresh_negative_entry_as_record() {
        let state = unreachable_state();

        // First call fails upstream, answers 404, and writes the negative entry
        let result = product_handler(State(state.clone()), Path("00000".to_string())).await;
        assert!(matches!(result, Err(ApiError::ProductNotFound)));

        // Second call hits the fresh negative entry and serves it as 200
        let result = product_handler(State(state.clone()), Path("00000".to_string())).await;
        let Json(record) = result.unwrap();
        assert_eq!(record.barcode, "00000");
        assert!(record.name.is_none());
        assert!(record.brands.is_none());
        assert!(record.ingredients.is_none());
        assert!(record.source.is_none());
        assert!(record.timestamp > 0.0);

        let stats = state.cache.read().await.stats();
        assert_eq!(stats.hits, 1, "second call should be a cache hit");
    }

    #[tokio::test]
    async fn test_product_handler_trims_whitespace() {
        let state = unreachable_state();

        let _ = product_handler(State(state.clone()), Path("  123  ".to_string())).await;

        let cache = state.cache.read().await;
        assert!(cache.peek("123").is_some(), "entry keyed by trimmed barcode");
        assert!(cache.peek("  123  ").is_none());
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = unreachable_state();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.total_entries, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
