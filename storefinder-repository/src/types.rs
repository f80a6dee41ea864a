//! Engine response types returned by `SearchEngineClient` implementations.

use serde_json::Value;

/// Result of an index creation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateIndexResponse {
    /// Whether the index was created in the cluster.
    pub acknowledged: bool,
    /// Whether the required shard copies started before the timeout.
    pub shards_acknowledged: bool,
}

/// Identity of a document the engine accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedDocument {
    pub id: String,
    pub index: String,
}

/// One page of search results in engine form.
///
/// `hits` holds the raw `_source` payload of each hit, in engine order.
/// `total_hits` counts every matching document, not just this page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHits {
    pub total_hits: u64,
    pub took_millis: u64,
    pub hits: Vec<Value>,
}
