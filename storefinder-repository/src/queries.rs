//! Search query builders.
//!
//! Queries are built as a structured `Query` value and only turned into the
//! engine's JSON DSL when a request is sent, so the proxy logic does not
//! depend on any client library's builder API.

use serde_json::{json, Value};

use storefinder_shared::{StoreLocation, StoreQueryRequest};

/// The document field holding each store's `geo_point`.
pub const LOCATION_FIELD: &str = "location";

/// Number of results fetched by a store search. There is no pagination.
pub const SEARCH_PAGE_SIZE: u64 = 20;

/// A search query clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Matches every document.
    MatchAll,
    /// Matches documents whose `field` lies within `distance` of `point`.
    GeoDistance {
        field: String,
        point: StoreLocation,
        distance: String,
    },
    /// Conjunction of scoring (`must`) and non-scoring (`filter`) clauses.
    Bool { must: Vec<Query>, filter: Vec<Query> },
}

impl Query {
    pub fn match_all() -> Self {
        Self::MatchAll
    }

    pub fn geo_distance(
        field: impl Into<String>,
        lat: f64,
        lon: f64,
        distance: impl Into<String>,
    ) -> Self {
        Self::GeoDistance {
            field: field.into(),
            point: StoreLocation { lat, lon },
            distance: distance.into(),
        }
    }

    /// Serialize the clause to the engine query DSL.
    pub fn to_json(&self) -> Value {
        match self {
            Query::MatchAll => json!({ "match_all": {} }),
            Query::GeoDistance {
                field,
                point,
                distance,
            } => {
                let mut clause = serde_json::Map::new();
                clause.insert("distance".to_string(), json!(distance));
                clause.insert(field.clone(), json!({ "lat": point.lat, "lon": point.lon }));
                json!({ "geo_distance": clause })
            }
            Query::Bool { must, filter } => {
                let must: Vec<Value> = must.iter().map(Query::to_json).collect();
                let filter: Vec<Value> = filter.iter().map(Query::to_json).collect();
                json!({
                    "bool": {
                        "must": must,
                        "filter": filter
                    }
                })
            }
        }
    }
}

/// A query together with the page to fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: Query,
    pub from: u64,
    pub size: u64,
}

impl SearchRequest {
    pub fn new(query: Query, from: u64, size: u64) -> Self {
        Self { query, from, size }
    }

    /// Build the full search request body.
    pub fn to_body(&self) -> Value {
        json!({
            "query": self.query.to_json(),
            "from": self.from,
            "size": self.size
        })
    }
}

/// Build the geo-radius query for a store search.
///
/// Every document matches the `must` clause, so the `filter` alone decides
/// the candidate set and does not affect scoring. No sort is attached and
/// `sap_id` is not consulted.
pub fn build_store_query(request: &StoreQueryRequest) -> Query {
    Query::Bool {
        must: vec![Query::match_all()],
        filter: vec![Query::geo_distance(
            LOCATION_FIELD,
            request.lat,
            request.lon,
            request.radius.clone(),
        )],
    }
}

/// Build the first page request for a store search.
pub fn build_store_search(request: &StoreQueryRequest) -> SearchRequest {
    SearchRequest::new(build_store_query(request), 0, SEARCH_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_all_json() {
        assert_eq!(Query::match_all().to_json(), json!({ "match_all": {} }));
    }

    #[test]
    fn test_geo_distance_json() {
        let query = Query::geo_distance("location", 40.0, -73.0, "10km");

        assert_eq!(
            query.to_json(),
            json!({
                "geo_distance": {
                    "distance": "10km",
                    "location": { "lat": 40.0, "lon": -73.0 }
                }
            })
        );
    }

    #[test]
    fn test_build_store_query_shape() {
        let request = StoreQueryRequest::new(40.0, -73.0, "5km");
        let query = build_store_query(&request).to_json();

        let must = query["bool"]["must"].as_array().unwrap();
        assert_eq!(must.len(), 1);
        assert!(must[0]["match_all"].is_object());

        let filter = query["bool"]["filter"].as_array().unwrap();
        assert_eq!(filter.len(), 1);
        assert_eq!(filter[0]["geo_distance"]["distance"], "5km");
        assert_eq!(filter[0]["geo_distance"]["location"]["lat"], 40.0);
        assert_eq!(filter[0]["geo_distance"]["location"]["lon"], -73.0);
    }

    #[test]
    fn test_sap_id_does_not_change_query() {
        let plain = StoreQueryRequest::new(1.0, 2.0, "1mi");
        let with_sap = StoreQueryRequest {
            sap_id: Some("SAP-1".to_string()),
            ..plain.clone()
        };

        assert_eq!(build_store_query(&plain), build_store_query(&with_sap));
    }

    #[test]
    fn test_store_search_body_is_first_page() {
        let request = StoreQueryRequest::new(40.0, -73.0, "5km");
        let body = build_store_search(&request).to_body();

        assert_eq!(body["from"], 0);
        assert_eq!(body["size"], 20);
        assert!(body.get("sort").is_none());
        assert!(body["query"]["bool"].is_object());
    }
}
