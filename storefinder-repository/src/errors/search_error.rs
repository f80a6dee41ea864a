//! Search error types.
//!
//! This module defines the errors the index proxy and the engine client can
//! return.

use thiserror::Error;

use storefinder_shared::ResponseError;

/// Errors that can occur during index proxy operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The index to create is already present in the engine.
    #[error("Index {0} already exists")]
    AlreadyExists(String),

    /// The index to delete is not present in the engine.
    #[error("Index {0} does not exist, nothing to do")]
    NotFound(String),

    /// Failed to establish a client for the search engine.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// A call to the search engine failed.
    #[error("Engine error: {0}")]
    EngineError(String),

    /// A record could not be encoded for the engine.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Search query execution failed. The cause is logged, not carried.
    #[error("Error executing search query")]
    QueryError,

    /// A search hit could not be decoded. The cause is logged, not carried.
    #[error("Error serializing hit source to StoreRecord")]
    MappingError,

    /// The request was rejected before reaching the engine.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl SearchError {
    /// Create an index already exists error.
    pub fn already_exists(index: impl Into<String>) -> Self {
        Self::AlreadyExists(index.into())
    }

    /// Create an index not found error.
    pub fn not_found(index: impl Into<String>) -> Self {
        Self::NotFound(index.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an engine error.
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::EngineError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}

impl From<&SearchError> for ResponseError {
    fn from(err: &SearchError) -> Self {
        ResponseError::new(err.to_string())
    }
}
