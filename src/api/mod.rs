//! API Module
//!
//! HTTP handlers and routing for the proxy's REST API.
//!
//! # Endpoints
//! - `GET /product/:barcode` - Look up a product by barcode
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
