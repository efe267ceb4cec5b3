//! Data models for the proxy API
//!
//! This module defines the product record returned to clients and the
//! DTOs used for the diagnostic endpoints.

pub mod product;
pub mod responses;

// Re-export commonly used types
pub use product::ProductRecord;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
