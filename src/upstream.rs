//! Upstream Client Module
//!
//! Fetches product data from the OpenFoodFacts HTTP API and remaps it into
//! the simplified record shape served to clients.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::cache::current_timestamp;
use crate::config::Config;
use crate::models::product::SOURCE_OPENFOODFACTS;
use crate::models::ProductRecord;

// == Upstream Wire Types ==
/// Response envelope of the OpenFoodFacts product endpoint.
///
/// `status` is 1 when the barcode is known; anything else (including a
/// missing field) means "not found" per upstream convention.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamResponse {
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub product: Option<UpstreamProduct>,
}

/// Subset of the upstream `product` object this service cares about.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamProduct {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub brands: Option<String>,
    #[serde(default)]
    pub ingredients_text: Option<String>,
}

// == Upstream Client ==
/// HTTP client for the upstream product database.
///
/// Every failure mode (transport error, timeout, non-200, upstream "not
/// found") collapses to `None`; callers cannot tell them apart, only the
/// logs can. No retries.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    // == Constructors ==
    /// Creates a client against the given base URL with a request timeout.
    ///
    /// The timeout covers the whole request, connect included.
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Creates a client from server configuration.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(config.upstream_url.clone(), config.upstream_timeout)
    }

    // == Fetch ==
    /// Looks up a barcode upstream.
    ///
    /// Returns a fully populated record on success, `None` otherwise.
    pub async fn fetch(&self, barcode: &str) -> Option<ProductRecord> {
        let url = format!("{}/{}.json", self.base_url, barcode);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(barcode, error = %err, "upstream request failed");
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            warn!(barcode, status = %response.status(), "upstream returned non-200");
            return None;
        }

        let body: UpstreamResponse = match response.json().await {
            Ok(body) => body,
            Err(err) => {
                warn!(barcode, error = %err, "upstream body was not valid JSON");
                return None;
            }
        };

        Self::record_from_body(barcode, body)
    }

    // == Remap ==
    /// Transforms an upstream response body into a ProductRecord.
    ///
    /// Separated from `fetch` so the field remap is testable without a
    /// network round trip.
    pub fn record_from_body(barcode: &str, body: UpstreamResponse) -> Option<ProductRecord> {
        if body.status != 1 {
            debug!(barcode, status = body.status, "barcode not known upstream");
            return None;
        }

        let product = body.product.unwrap_or_default();
        Some(ProductRecord {
            barcode: barcode.to_string(),
            name: product.product_name,
            brands: product.brands,
            ingredients: product.ingredients_text,
            source: Some(SOURCE_OPENFOODFACTS.to_string()),
            timestamp: current_timestamp(),
        })
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_body_known_product() {
        let body: UpstreamResponse = serde_json::from_str(
            r#"{
                "status": 1,
                "product": {
                    "product_name": "Example Cereal",
                    "brands": "Example Brand",
                    "ingredients_text": "oats, sugar"
                }
            }"#,
        )
        .unwrap();

        let record = UpstreamClient::record_from_body("0737628064502", body).unwrap();
        assert_eq!(record.barcode, "0737628064502");
        assert_eq!(record.name.as_deref(), Some("Example Cereal"));
        assert_eq!(record.brands.as_deref(), Some("Example Brand"));
        assert_eq!(record.ingredients.as_deref(), Some("oats, sugar"));
        assert_eq!(record.source.as_deref(), Some(SOURCE_OPENFOODFACTS));
        assert!(record.timestamp > 0.0);
    }

    #[test]
    fn test_record_from_body_status_zero() {
        let body: UpstreamResponse =
            serde_json::from_str(r#"{"status": 0, "status_verbose": "product not found"}"#)
                .unwrap();

        assert!(UpstreamClient::record_from_body("0000000000000", body).is_none());
    }

    #[test]
    fn test_record_from_body_missing_status() {
        let body: UpstreamResponse = serde_json::from_str(r#"{}"#).unwrap();

        assert!(UpstreamClient::record_from_body("12345", body).is_none());
    }

    #[test]
    fn test_record_from_body_partial_product() {
        // Upstream often reports a product with only some fields filled in
        let body: UpstreamResponse = serde_json::from_str(
            r#"{"status": 1, "product": {"product_name": "Mystery Snack"}}"#,
        )
        .unwrap();

        let record = UpstreamClient::record_from_body("12345", body).unwrap();
        assert_eq!(record.name.as_deref(), Some("Mystery Snack"));
        assert!(record.brands.is_none());
        assert!(record.ingredients.is_none());
        assert_eq!(record.source.as_deref(), Some(SOURCE_OPENFOODFACTS));
    }

    #[test]
    fn test_record_from_body_status_one_without_product() {
        let body: UpstreamResponse = serde_json::from_str(r#"{"status": 1}"#).unwrap();

        // Malformed but status says found: record exists with no attributes
        let record = UpstreamClient::record_from_body("12345", body).unwrap();
        assert!(record.name.is_none());
        assert_eq!(record.source.as_deref(), Some(SOURCE_OPENFOODFACTS));
    }

    #[test]
    fn test_record_from_body_preserves_empty_strings() {
        let body: UpstreamResponse = serde_json::from_str(
            r#"{"status": 1, "product": {"product_name": "", "brands": null}}"#,
        )
        .unwrap();

        let record = UpstreamClient::record_from_body("12345", body).unwrap();
        // Empty string from upstream is not the same as absent
        assert_eq!(record.name.as_deref(), Some(""));
        assert!(record.brands.is_none());
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_returns_none() {
        // Port 1 on localhost refuses connections
        let client = UpstreamClient::new("http://127.0.0.1:1/api/v0/product", 1).unwrap();

        assert!(client.fetch("12345").await.is_none());
    }
}
