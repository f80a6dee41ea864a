//! Error types for the store finder repository.

mod search_error;

pub use search_error::SearchError;
