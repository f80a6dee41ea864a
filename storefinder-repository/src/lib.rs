//! # Store Finder Repository
//!
//! This crate provides the index proxy and the traits and implementations it
//! uses to talk to the search engine. It includes definitions for errors, the
//! engine interface, the query model, and a concrete implementation for
//! OpenSearch.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod proxy;
pub mod queries;
pub mod types;

pub use config::{DeleteMode, ProxyConfig};
pub use errors::SearchError;
pub use interfaces::SearchEngineClient;
pub use opensearch::{store_index_mapping, OpenSearchClient, DEFAULT_INDEX_NAME};
pub use proxy::IndexProxy;
pub use queries::{build_store_query, Query, SearchRequest, SEARCH_PAGE_SIZE};
