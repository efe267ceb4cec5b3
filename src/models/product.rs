//! Product record model
//!
//! The simplified product shape returned to clients and stored in the cache.

use serde::{Deserialize, Serialize};

/// Name reported in the `source` field for records fetched from OpenFoodFacts.
pub const SOURCE_OPENFOODFACTS: &str = "OpenFoodFacts";

/// A product's known attributes, keyed by barcode.
///
/// Optional fields are `None` when unknown and serialize as JSON `null`, so
/// every field is always present in the response body. An absent field is
/// distinct from an empty string reported by the upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// The lookup key, trimmed of surrounding whitespace
    pub barcode: String,
    /// Product name as reported upstream
    pub name: Option<String>,
    /// Comma-separated brand list as reported upstream
    pub brands: Option<String>,
    /// Free-text ingredient list as reported upstream
    pub ingredients: Option<String>,
    /// Upstream provider name; `None` for negative-cache records
    pub source: Option<String>,
    /// Seconds since epoch at fetch/cache-write time
    pub timestamp: f64,
}

impl ProductRecord {
    /// Creates a record for a barcode with no known attributes.
    ///
    /// Used for negative caching: the record marks the barcode as looked up
    /// and absent, so the upstream is not contacted again until the entry
    /// goes stale.
    pub fn absent(barcode: impl Into<String>, timestamp: f64) -> Self {
        Self {
            barcode: barcode.into(),
            name: None,
            brands: None,
            ingredients: None,
            source: None,
            timestamp,
        }
    }

    /// Returns true if this record carries no product data.
    pub fn is_absent(&self) -> bool {
        self.source.is_none()
    }
}
