//! # Store Finder Shared
//!
//! Domain types exchanged between the index proxy and its callers: store
//! records as they are stored in the search index, the geo-radius query
//! request and response, and the bulk indexing result.

mod query;
mod store;

pub use query::{IndexerResponse, ResponseError, StoreQueryRequest, StoreQueryResponse};
pub use store::{StoreHour, StoreLocation, StoreRecord};
