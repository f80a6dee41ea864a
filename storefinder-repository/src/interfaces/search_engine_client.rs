//! Search engine client trait definition.
//!
//! This module defines the abstract interface the index proxy uses to talk to
//! the search engine, allowing for different backend implementations
//! (OpenSearch, in-memory test doubles, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchError;
use crate::queries::SearchRequest;
use crate::types::{CreateIndexResponse, IndexedDocument, SearchHits};

/// Abstract interface for search engine operations.
///
/// Implementations are injected into `IndexProxy` and shared read-only
/// across all of its operations.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// Every transport or server-side failure is reported as
/// `SearchError::EngineError`; implementations do not retry.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Check whether an index with the given name exists.
    async fn index_exists(&self, index: &str) -> Result<bool, SearchError>;

    /// Create an index using the given settings and mappings body verbatim.
    ///
    /// # Returns
    ///
    /// * `Ok(CreateIndexResponse)` - The engine's acknowledgement flags
    /// * `Err(SearchError)` - If the request fails or is rejected
    async fn create_index(
        &self,
        index: &str,
        mapping: &Value,
    ) -> Result<CreateIndexResponse, SearchError>;

    /// Delete an index and all of its documents.
    async fn delete_index(&self, index: &str) -> Result<(), SearchError>;

    /// Write a document under the given id, replacing any existing document
    /// with the same id.
    ///
    /// # Arguments
    ///
    /// * `index` - The target index
    /// * `id` - The document id
    /// * `body` - The encoded document
    async fn upsert_document(
        &self,
        index: &str,
        id: &str,
        body: &Value,
    ) -> Result<IndexedDocument, SearchError>;

    /// Execute a search and return one page of raw hits.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let request = SearchRequest::new(Query::match_all(), 0, 20);
    /// let page = client.search("stores", &request).await?;
    /// println!("Found {} results", page.total_hits);
    /// ```
    async fn search(&self, index: &str, request: &SearchRequest)
        -> Result<SearchHits, SearchError>;

    /// Check if the search engine is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the cluster status is green or yellow
    /// * `Ok(false)` - If the cluster reports red or an unknown status
    /// * `Err(SearchError)` - If the health check fails to execute
    async fn health_check(&self) -> Result<bool, SearchError>;
}
