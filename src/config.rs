//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_TTL_SECONDS;

/// Default base URL for the OpenFoodFacts product API.
pub const DEFAULT_UPSTREAM_URL: &str = "https://world.openfoodfacts.org/api/v0/product";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Cache entry time-to-live in seconds
    pub cache_ttl: u64,
    /// Upstream request timeout in seconds
    pub upstream_timeout: u64,
    /// Base URL of the upstream product API (barcode and `.json` are appended)
    pub upstream_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 3600)
    /// - `UPSTREAM_TIMEOUT` - Upstream timeout in seconds (default: 6)
    /// - `UPSTREAM_URL` - Upstream API base URL (default: OpenFoodFacts v0)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECONDS),
            upstream_timeout: env::var("UPSTREAM_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(6),
            upstream_url: env::var("UPSTREAM_URL")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            cache_ttl: DEFAULT_TTL_SECONDS,
            upstream_timeout: 6,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
        }
    }
}
