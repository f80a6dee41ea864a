//! Startup routine: provision the store index and load store records.

use std::path::Path;

use tracing::{info, warn};

use crate::config::Dependencies;
use crate::IndexingError;
use storefinder_repository::{store_index_mapping, IndexProxy, SearchError};
use storefinder_shared::{IndexerResponse, StoreRecord};

/// Create the store index with the default mapping unless it already exists.
///
/// Returns whether a new index was created.
pub async fn ensure_index(proxy: &IndexProxy, index: &str) -> Result<bool, IndexingError> {
    match proxy.create_index(index, &store_index_mapping()).await {
        Ok(()) => {
            info!(index = %index, "Store index created");
            Ok(true)
        }
        Err(SearchError::AlreadyExists(_)) => {
            info!(index = %index, "Store index already exists");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Parse a JSON array of store records.
pub fn parse_records(raw: &str) -> Result<Vec<StoreRecord>, IndexingError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read store records from a JSON file.
pub async fn load_records(path: &Path) -> Result<Vec<StoreRecord>, IndexingError> {
    let raw = tokio::fs::read_to_string(path).await?;
    parse_records(&raw)
}

/// Provision the index and, when a records file is configured, bulk load it.
pub async fn run(dependencies: &Dependencies) -> Result<Option<IndexerResponse>, IndexingError> {
    let index = dependencies.settings.index_name.as_str();
    ensure_index(&dependencies.proxy, index).await?;

    let Some(path) = dependencies.settings.records_path.as_deref() else {
        info!("No records file configured, nothing to load");
        return Ok(None);
    };

    let records = load_records(path).await?;
    info!(path = %path.display(), count = records.len(), "Loaded store records");

    let response = dependencies.proxy.bulk_index(index, records).await;
    if response.has_failures() {
        let failed: Vec<&str> = response
            .stores_failed_to_index
            .iter()
            .map(|r| r.store_code.as_str())
            .collect();
        warn!(failed = ?failed, "Some store records were not indexed");
    }

    Ok(Some(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use storefinder_repository::types::{CreateIndexResponse, IndexedDocument, SearchHits};
    use storefinder_repository::{SearchEngineClient, SearchRequest};

    /// Engine stub that only answers index lifecycle calls.
    struct LifecycleEngine {
        exists: bool,
        creates: AtomicUsize,
    }

    impl LifecycleEngine {
        fn new(exists: bool) -> Self {
            Self {
                exists,
                creates: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SearchEngineClient for LifecycleEngine {
        async fn index_exists(&self, _index: &str) -> Result<bool, SearchError> {
            Ok(self.exists)
        }

        async fn create_index(
            &self,
            _index: &str,
            mapping: &Value,
        ) -> Result<CreateIndexResponse, SearchError> {
            assert_eq!(mapping["mappings"]["properties"]["location"]["type"], "geo_point");
            self.creates.fetch_add(1, Ordering::SeqCst);
            Ok(CreateIndexResponse {
                acknowledged: true,
                shards_acknowledged: true,
            })
        }

        async fn delete_index(&self, _index: &str) -> Result<(), SearchError> {
            Ok(())
        }

        async fn upsert_document(
            &self,
            index: &str,
            id: &str,
            _body: &Value,
        ) -> Result<IndexedDocument, SearchError> {
            Ok(IndexedDocument {
                id: id.to_string(),
                index: index.to_string(),
            })
        }

        async fn search(
            &self,
            _index: &str,
            _request: &SearchRequest,
        ) -> Result<SearchHits, SearchError> {
            Ok(SearchHits::default())
        }

        async fn health_check(&self) -> Result<bool, SearchError> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn test_ensure_index_creates_missing_index() {
        let engine = Arc::new(LifecycleEngine::new(false));
        let proxy = IndexProxy::new(engine.clone());

        assert!(ensure_index(&proxy, "stores").await.unwrap());
        assert_eq!(engine.creates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_ensure_index_accepts_existing_index() {
        let engine = Arc::new(LifecycleEngine::new(true));
        let proxy = IndexProxy::new(engine.clone());

        assert!(!ensure_index(&proxy, "stores").await.unwrap());
        assert_eq!(engine.creates.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_parse_records() {
        let records = parse_records(
            r#"[
                { "store_code": "S1", "location": { "lat": 40.0, "lon": -73.0 } },
                { "store_code": "S2", "store_hours": [ { "day_of_week": "SUN" } ] }
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].location.unwrap().lon, -73.0);
        assert_eq!(records[1].hours[0].day_of_week, "SUN");
    }

    #[test]
    fn test_parse_records_rejects_object() {
        let result = parse_records(r#"{ "store_code": "S1" }"#);
        assert!(matches!(result, Err(IndexingError::RecordsError(_))));
    }
}
