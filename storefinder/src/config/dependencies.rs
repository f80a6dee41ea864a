//! Dependency initialization and wiring for the store finder.

use std::sync::Arc;
use tracing::info;

use crate::config::Settings;
use crate::IndexingError;
use storefinder_repository::{IndexProxy, OpenSearchClient, ProxyConfig, SearchEngineClient};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The index proxy bound to the configured engine.
    pub proxy: IndexProxy,
    /// The settings the dependencies were built from.
    pub settings: Settings,
}

impl Dependencies {
    /// Initialize all dependencies from the given settings.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If the client cannot be built or the cluster is unhealthy
    pub async fn new(settings: Settings) -> Result<Self, IndexingError> {
        info!(
            opensearch_url = %settings.opensearch_url,
            index = %settings.index_name,
            delete_mode = %settings.delete_mode,
            "Initializing dependencies"
        );

        let search_client = OpenSearchClient::new(&settings.opensearch_url, settings.request_timeout)
            .map_err(|e| IndexingError::config(format!("Failed to create OpenSearch client: {}", e)))?;

        // Verify OpenSearch is reachable
        let healthy = search_client
            .health_check()
            .await
            .map_err(|e| IndexingError::config(format!("OpenSearch health check failed: {}", e)))?;

        if !healthy {
            return Err(IndexingError::config("OpenSearch cluster is unhealthy"));
        }

        info!("OpenSearch connection verified");

        let proxy = IndexProxy::with_config(
            Arc::new(search_client),
            ProxyConfig::with_delete_mode(settings.delete_mode),
        );

        Ok(Self { proxy, settings })
    }
}
