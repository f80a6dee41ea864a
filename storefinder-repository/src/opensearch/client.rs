//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use std::time::Duration;

use async_trait::async_trait;
use opensearch::{
    cluster::ClusterHealthParts,
    http::response::Response,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesDeleteParts, IndicesExistsParts},
    IndexParts, OpenSearch, SearchParts,
};
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::queries::SearchRequest;
use crate::types::{CreateIndexResponse, IndexedDocument, SearchHits};

/// OpenSearch client implementation.
///
/// # Example
///
/// ```ignore
/// let client = OpenSearchClient::new("http://localhost:9200", None)?;
/// let proxy = IndexProxy::new(Arc::new(client));
/// proxy.create_index("stores", &store_index_mapping()).await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    /// * `timeout` - Optional deadline applied to every request
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchError)` - If connection setup fails
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self, SearchError> {
        let parsed_url = Url::parse(url).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let mut builder = TransportBuilder::new(conn_pool).disable_proxy();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let transport = builder
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        info!(
            url = %url,
            timeout_ms = timeout.map(|t| t.as_millis() as u64),
            "Created OpenSearch client"
        );

        Ok(Self {
            client: OpenSearch::new(transport),
        })
    }

    /// Turn a non-success response into an engine error carrying the body.
    async fn ensure_success(response: Response, action: &str) -> Result<Response, SearchError> {
        let status = response.status_code();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %error_body, action, "OpenSearch request failed");
        Err(SearchError::engine(format!(
            "{} failed with status {}: {}",
            action, status, error_body
        )))
    }

    /// Read the JSON body of a successful response.
    async fn json_body(response: Response) -> Result<Value, SearchError> {
        response
            .json::<Value>()
            .await
            .map_err(|e| SearchError::engine(format!("Invalid response body: {}", e)))
    }

    /// Extract total hits, timing and raw sources from a search response body.
    ///
    /// `hits.total` is accepted both as an object with a `value` field and as
    /// a bare number. A hit without `_source` yields `null`, which later
    /// fails to decode as a store record.
    fn parse_search_response(body: &Value) -> Result<SearchHits, SearchError> {
        let hits = body
            .get("hits")
            .ok_or_else(|| SearchError::engine("Search response has no hits section"))?;

        let total_hits = match hits.get("total") {
            Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
            Some(total) => total.get("value").and_then(Value::as_u64).unwrap_or(0),
            None => 0,
        };

        let took_millis = body.get("took").and_then(Value::as_u64).unwrap_or(0);

        let sources = hits
            .get("hits")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|hit| hit.get("_source").cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .unwrap_or_default();

        Ok(SearchHits {
            total_hits,
            took_millis,
            hits: sources,
        })
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchClient {
    async fn index_exists(&self, index: &str) -> Result<bool, SearchError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| SearchError::engine(e.to_string()))?;

        let status = response.status_code();
        match status.as_u16() {
            200 => Ok(true),
            404 => Ok(false),
            _ => Err(SearchError::engine(format!(
                "Index exists check failed with status {}",
                status
            ))),
        }
    }

    async fn create_index(
        &self,
        index: &str,
        mapping: &Value,
    ) -> Result<CreateIndexResponse, SearchError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(mapping.clone())
            .send()
            .await
            .map_err(|e| SearchError::engine(e.to_string()))?;

        let response = Self::ensure_success(response, "Create index").await?;
        let body = Self::json_body(response).await?;

        Ok(CreateIndexResponse {
            acknowledged: body["acknowledged"].as_bool().unwrap_or(false),
            shards_acknowledged: body["shards_acknowledged"].as_bool().unwrap_or(false),
        })
    }

    async fn delete_index(&self, index: &str) -> Result<(), SearchError> {
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| SearchError::engine(e.to_string()))?;

        Self::ensure_success(response, "Delete index").await?;
        Ok(())
    }

    async fn upsert_document(
        &self,
        index: &str,
        id: &str,
        body: &Value,
    ) -> Result<IndexedDocument, SearchError> {
        let response = self
            .client
            .index(IndexParts::IndexId(index, id))
            .body(body.clone())
            .send()
            .await
            .map_err(|e| SearchError::engine(e.to_string()))?;

        let response = Self::ensure_success(response, "Index document").await?;
        let result = Self::json_body(response).await?;

        let indexed = IndexedDocument {
            id: result["_id"].as_str().unwrap_or(id).to_string(),
            index: result["_index"].as_str().unwrap_or(index).to_string(),
        };
        debug!(doc_id = %indexed.id, index = %indexed.index, "Document indexed");
        Ok(indexed)
    }

    async fn search(
        &self,
        index: &str,
        request: &SearchRequest,
    ) -> Result<SearchHits, SearchError> {
        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(request.to_body())
            .send()
            .await
            .map_err(|e| SearchError::engine(e.to_string()))?;

        let response = Self::ensure_success(response, "Search").await?;
        let body = Self::json_body(response).await?;

        Self::parse_search_response(&body)
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let body = Self::json_body(response).await?;
        let status = body["status"].as_str().unwrap_or("unknown");

        info!(status = %status, "OpenSearch cluster status");
        Ok(status == "green" || status == "yellow")
    }
}
