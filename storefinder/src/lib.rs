//! # Store Finder
//!
//! Main library for the store finder index proxy.
//!
//! This crate provides the configuration, dependency wiring, logging setup and
//! startup routine used by the `storefinder` binary.

pub mod config;
pub mod logging;
pub mod startup;

pub use config::{Dependencies, Settings};

use thiserror::Error;

/// Errors that can occur during startup.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] storefinder_repository::SearchError),

    /// Store records file could not be parsed.
    #[error("Records error: {0}")]
    RecordsError(#[from] serde_json::Error),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    LoggingError(String),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
