//! Request and response types for proxy operations.

use serde::{Deserialize, Serialize};

use crate::store::StoreRecord;

/// Geo-radius search input.
///
/// `radius` is a distance string understood by the engine, e.g. `"10km"` or
/// `"2mi"`. `sap_id` is accepted but not used to filter results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreQueryRequest {
    pub lat: f64,
    pub lon: f64,
    pub radius: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sap_id: Option<String>,
}

impl StoreQueryRequest {
    pub fn new(lat: f64, lon: f64, radius: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            radius: radius.into(),
            sap_id: None,
        }
    }
}

/// Geo-radius search output.
///
/// `hits` is the engine-reported total and may exceed `stores.len()`, since
/// only one page of results is fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreQueryResponse {
    pub hits: u64,
    pub took_in_millis: u64,
    #[serde(default)]
    pub stores: Vec<StoreRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ResponseError>>,
}

/// Outcome of a bulk indexing run.
///
/// Every input record appears in exactly one of the two lists, and each list
/// keeps input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexerResponse {
    pub index_name: String,
    #[serde(default)]
    pub stores_indexed: Vec<StoreRecord>,
    #[serde(default)]
    pub stores_failed_to_index: Vec<StoreRecord>,
}

impl IndexerResponse {
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            stores_indexed: Vec::new(),
            stores_failed_to_index: Vec::new(),
        }
    }

    /// Total number of records processed.
    pub fn total(&self) -> usize {
        self.stores_indexed.len() + self.stores_failed_to_index.len()
    }

    /// Whether any record failed to index.
    pub fn has_failures(&self) -> bool {
        !self.stores_failed_to_index.is_empty()
    }
}

/// A human readable error carried inside a response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseError {
    pub message: String,
}

impl ResponseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_request_without_sap_id() {
        let request: StoreQueryRequest = serde_json::from_value(json!({
            "lat": 40.0,
            "lon": -73.0,
            "radius": "5km"
        }))
        .unwrap();

        assert_eq!(request, StoreQueryRequest::new(40.0, -73.0, "5km"));
    }

    #[test]
    fn test_response_omits_empty_errors() {
        let response = StoreQueryResponse {
            hits: 0,
            took_in_millis: 3,
            stores: vec![],
            errors: None,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("errors").is_none());
        assert_eq!(value["stores"], json!([]));
    }

    #[test]
    fn test_indexer_response_counts() {
        let mut response = IndexerResponse::new("stores");
        assert_eq!(response.total(), 0);
        assert!(!response.has_failures());

        response.stores_indexed.push(StoreRecord::new("S1"));
        response.stores_failed_to_index.push(StoreRecord::new("S2"));

        assert_eq!(response.total(), 2);
        assert!(response.has_failures());
    }
}
