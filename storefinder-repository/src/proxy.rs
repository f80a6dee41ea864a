//! Index proxy implementation.
//!
//! This module provides the proxy application code uses to manage store
//! indexes, bulk-load store records and run geo-radius searches. All engine
//! access goes through an injected `SearchEngineClient`.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use crate::config::{DeleteMode, ProxyConfig};
use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::queries::build_store_search;
use storefinder_shared::{IndexerResponse, StoreQueryRequest, StoreQueryResponse, StoreRecord};

/// The main entry point for store index operations.
///
/// Every operation awaits its engine calls one at a time; nothing is issued
/// concurrently and nothing is retried.
pub struct IndexProxy {
    engine: Arc<dyn SearchEngineClient>,
    config: ProxyConfig,
}

impl IndexProxy {
    /// Create a new IndexProxy with default configuration.
    pub fn new(engine: Arc<dyn SearchEngineClient>) -> Self {
        Self {
            engine,
            config: ProxyConfig::default(),
        }
    }

    /// Create a new IndexProxy with custom configuration.
    pub fn with_config(engine: Arc<dyn SearchEngineClient>, config: ProxyConfig) -> Self {
        Self { engine, config }
    }

    fn validate_index_name(index: &str) -> Result<(), SearchError> {
        if index.trim().is_empty() {
            return Err(SearchError::validation("index name is required"));
        }
        Ok(())
    }

    /// Create an index with the given settings and mappings.
    ///
    /// Fails with `AlreadyExists` without touching the engine further if the
    /// index is present. The mapping is sent unchanged.
    #[instrument(skip(self, mapping), fields(index = %index))]
    pub async fn create_index(&self, index: &str, mapping: &Value) -> Result<(), SearchError> {
        Self::validate_index_name(index)?;

        if self.engine.index_exists(index).await? {
            return Err(SearchError::already_exists(index));
        }

        let result = self.engine.create_index(index, mapping).await?;
        info!(
            acknowledged = result.acknowledged,
            shards_acknowledged = result.shards_acknowledged,
            "Index created"
        );
        Ok(())
    }

    /// Delete an index and all of its documents.
    ///
    /// Fails with `NotFound` if the index is absent. Under
    /// `DeleteMode::BestEffort` a failing delete call is only logged and the
    /// caller sees success; under `DeleteMode::Strict` it is returned.
    #[instrument(skip(self), fields(index = %index, mode = %self.config.delete_mode))]
    pub async fn delete_index(&self, index: &str) -> Result<(), SearchError> {
        Self::validate_index_name(index)?;

        if !self.engine.index_exists(index).await? {
            return Err(SearchError::not_found(index));
        }

        match self.engine.delete_index(index).await {
            Ok(()) => {
                info!("Index successfully deleted");
                Ok(())
            }
            Err(e) => match self.config.delete_mode {
                DeleteMode::BestEffort => {
                    warn!(error = %e, "Index delete failed, reporting success");
                    Ok(())
                }
                DeleteMode::Strict => {
                    error!(error = %e, "Index delete failed");
                    Err(e)
                }
            },
        }
    }

    /// Index store records one by one, keyed by store code.
    ///
    /// A record that cannot be encoded or that the engine rejects is moved to
    /// `stores_failed_to_index` and the loop continues. Both lists keep input
    /// order. This never fails as a whole.
    #[instrument(skip(self, records), fields(index = %index, record_count = records.len()))]
    pub async fn bulk_index(&self, index: &str, records: Vec<StoreRecord>) -> IndexerResponse {
        let mut response = IndexerResponse::new(index);

        for record in records {
            match self.index_record(index, &record).await {
                Ok(()) => response.stores_indexed.push(record),
                Err(e) => {
                    warn!(
                        store_code = %record.store_code,
                        error = %e,
                        "Error adding store record to index"
                    );
                    response.stores_failed_to_index.push(record);
                }
            }
        }

        info!(
            indexed = response.stores_indexed.len(),
            failed = response.stores_failed_to_index.len(),
            "Bulk indexing completed"
        );
        response
    }

    async fn index_record(&self, index: &str, record: &StoreRecord) -> Result<(), SearchError> {
        let body = encode_record(record)?;
        let indexed = self
            .engine
            .upsert_document(index, &record.store_code, &body)
            .await?;
        debug!(doc_id = %indexed.id, index = %indexed.index, "Added store to index");
        Ok(())
    }

    /// Find stores within the request radius of the request point.
    ///
    /// Only the first page of results is fetched, so `hits` can exceed the
    /// number of stores returned. A single undecodable hit fails the whole
    /// search with `MappingError`.
    #[instrument(skip(self, request), fields(index = %index, radius = %request.radius))]
    pub async fn search(
        &self,
        request: &StoreQueryRequest,
        index: &str,
    ) -> Result<StoreQueryResponse, SearchError> {
        Self::validate_index_name(index)?;

        let search = build_store_search(request);
        let page = self.engine.search(index, &search).await.map_err(|e| {
            error!(error = %e, "Error executing search query");
            SearchError::QueryError
        })?;

        let mut stores = Vec::with_capacity(page.hits.len());
        if page.total_hits > 0 {
            for source in page.hits {
                let store: StoreRecord = serde_json::from_value(source).map_err(|e| {
                    error!(error = %e, "Error serializing hit source to StoreRecord");
                    SearchError::MappingError
                })?;
                stores.push(store);
            }
        }

        debug!(
            hits = page.total_hits,
            returned = stores.len(),
            took_ms = page.took_millis,
            "Search completed"
        );

        Ok(StoreQueryResponse {
            hits: page.total_hits,
            took_in_millis: page.took_millis,
            stores,
            errors: None,
        })
    }
}

/// Encode a store record as an index document.
///
/// Rejects records without a store code, since it becomes the document id,
/// and locations with non-finite coordinates.
pub fn encode_record(record: &StoreRecord) -> Result<Value, SearchError> {
    if record.store_code.is_empty() {
        return Err(SearchError::serialization("store_code is required"));
    }
    if let Some(location) = &record.location {
        if !location.is_finite() {
            return Err(SearchError::serialization(format!(
                "non-finite location ({}, {})",
                location.lat, location.lon
            )));
        }
    }
    serde_json::to_value(record).map_err(|e| SearchError::serialization(e.to_string()))
}
