//! Environment based settings.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use storefinder_repository::{DeleteMode, DEFAULT_INDEX_NAME};

use crate::IndexingError;

/// Default OpenSearch URL.
const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub opensearch_url: String,
    pub request_timeout: Option<Duration>,
    pub index_name: String,
    pub delete_mode: DeleteMode,
    pub records_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Settings {
    /// Read settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
    /// - `OPENSEARCH_TIMEOUT_SECS`: per-request deadline in seconds (default: none)
    /// - `STOREFINDER_INDEX`: store index name (default: stores)
    /// - `STOREFINDER_DELETE_MODE`: `best_effort` or `strict` (default: best_effort)
    /// - `STOREFINDER_RECORDS_PATH`: JSON file of store records to load (optional)
    /// - `LOG_FORMAT`: `text` or `json` (default: text)
    pub fn from_env() -> Result<Self, IndexingError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through the given variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, IndexingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let opensearch_url =
            value("OPENSEARCH_URL").unwrap_or_else(|| DEFAULT_OPENSEARCH_URL.to_string());

        let request_timeout = value("OPENSEARCH_TIMEOUT_SECS")
            .map(|raw| {
                raw.trim().parse::<u64>().map(Duration::from_secs).map_err(|_| {
                    IndexingError::config(format!("Invalid OPENSEARCH_TIMEOUT_SECS: {}", raw))
                })
            })
            .transpose()?;

        let index_name =
            value("STOREFINDER_INDEX").unwrap_or_else(|| DEFAULT_INDEX_NAME.to_string());

        let delete_mode = value("STOREFINDER_DELETE_MODE")
            .map(|raw| {
                raw.parse::<DeleteMode>()
                    .map_err(|e| IndexingError::config(e.to_string()))
            })
            .transpose()?
            .unwrap_or_default();

        let records_path = value("STOREFINDER_RECORDS_PATH").map(PathBuf::from);

        let log_format = match value("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(IndexingError::config(format!("Invalid LOG_FORMAT: {}", other)))
            }
        };

        Ok(Self {
            opensearch_url,
            request_timeout,
            index_name,
            delete_mode,
            records_path,
            log_format,
        })
    }
}
