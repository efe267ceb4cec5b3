//! Product Proxy - A caching lookup service for product barcodes
//!
//! Accepts a barcode over HTTP, queries the OpenFoodFacts product database,
//! and caches the simplified result in memory with a fixed TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use upstream::UpstreamClient;
