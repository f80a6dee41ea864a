//! OpenSearch index configuration and mappings.
//!
//! This module defines the default settings and mappings for a store index.
//! `IndexProxy::create_index` accepts any mapping; this is the one the
//! storefinder binary provisions.

use serde_json::{json, Value};

/// The default name of the store index.
pub const DEFAULT_INDEX_NAME: &str = "stores";

/// Get the index settings and mappings for a store index.
///
/// The configuration includes:
/// - **geo_point** on `location` for geo-distance filtering
/// - **keyword** fields for ids and exact-match address parts
/// - **text** fields for descriptive content
pub fn store_index_mapping() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 1
        },
        "mappings": {
            "properties": {
                "store_code": { "type": "keyword" },
                "sap_id": { "type": "keyword" },
                "business_name": {
                    "type": "text",
                    "fields": {
                        "raw": { "type": "keyword" }
                    }
                },
                "address_1": { "type": "text" },
                "address_2": { "type": "text" },
                "city": { "type": "keyword" },
                "state": { "type": "keyword" },
                "postal_code": { "type": "keyword" },
                "country": { "type": "keyword" },
                "primary_phone": { "type": "keyword", "index": false },
                "website": { "type": "keyword", "index": false },
                "description": { "type": "text" },
                "payment_types": { "type": "text" },
                "primary_category": { "type": "keyword" },
                "photo": { "type": "keyword", "index": false },
                "store_hours": {
                    "properties": {
                        "day_of_week": { "type": "keyword" },
                        "open_time": { "type": "keyword" },
                        "close_time": { "type": "keyword" }
                    }
                },
                "location": { "type": "geo_point" }
            }
        }
    })
}
